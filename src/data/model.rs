use std::fmt;

use ndarray::Array1;
use serde::Deserialize;

use super::error::LoadError;

/// Zero-based position of the latitude field in a record.
pub const LAT_FIELD: usize = 3;
/// Zero-based position of the longitude field in a record.
pub const LONG_FIELD: usize = 4;
/// A record must have at least this many fields.
pub const MIN_FIELDS: usize = LONG_FIELD + 1;

// ---------------------------------------------------------------------------
// Column – which coordinate a value belongs to
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Latitude,
    Longitude,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Latitude => write!(f, "latitude"),
            Column::Longitude => write!(f, "longitude"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one typed row, used by the serde loader
// ---------------------------------------------------------------------------

/// One population entry, matched against the header by name.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "City", alias = "city")]
    pub city: String,
    #[serde(rename = "State", alias = "state")]
    pub state: String,
    /// Empty in the source data for some places.
    #[serde(rename = "Population", alias = "population")]
    pub population: Option<u64>,
    #[serde(rename = "Latitude", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude", alias = "longitude")]
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// ColumnBuffers – raw text collected during the read pass
// ---------------------------------------------------------------------------

/// Append-only text buffers, index-aligned: `lat[i]` and `long[i]` come from
/// the same data row.  `push` is the only writer.
#[derive(Debug, Clone, Default)]
pub struct ColumnBuffers {
    lat: Vec<String>,
    long: Vec<String>,
}

impl ColumnBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, lat: &str, long: &str) {
        self.lat.push(lat.to_string());
        self.long.push(long.to_string());
    }

    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    /// Convert both buffers into numeric arrays.  Fails on the first value
    /// that does not parse; no partial result is returned.
    pub fn into_coordinates(self) -> Result<Coordinates, LoadError> {
        let lat = parse_column(&self.lat, Column::Latitude)?;
        let long = parse_column(&self.long, Column::Longitude)?;
        Ok(Coordinates { lat, long })
    }
}

fn parse_column(values: &[String], column: Column) -> Result<Array1<f64>, LoadError> {
    let mut out = Vec::with_capacity(values.len());
    for (row, text) in values.iter().enumerate() {
        out.push(parse_coordinate(text, column, row)?);
    }
    Ok(Array1::from(out))
}

/// Parse one field as `f64`.  Surrounding whitespace is ignored.
pub fn parse_coordinate(text: &str, column: Column, row: usize) -> Result<f64, LoadError> {
    text.trim()
        .parse::<f64>()
        .map_err(|source| LoadError::Parse {
            column,
            row,
            value: text.to_string(),
            source,
        })
}

// ---------------------------------------------------------------------------
// Coordinates – the final numeric arrays
// ---------------------------------------------------------------------------

/// Latitude and longitude arrays of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub lat: Array1<f64>,
    pub long: Array1<f64>,
}

impl Coordinates {
    /// Build from already-parsed vectors.  Both must have the same length.
    pub fn from_vecs(lat: Vec<f64>, long: Vec<f64>) -> Self {
        debug_assert_eq!(lat.len(), long.len());
        Self {
            lat: Array1::from(lat),
            long: Array1::from(long),
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }
}
