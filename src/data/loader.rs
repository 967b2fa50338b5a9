use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::LoadError;
use super::model::{
    parse_coordinate, Column, ColumnBuffers, Coordinates, Record, LAT_FIELD, LONG_FIELD,
    MIN_FIELDS,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// How the file is parsed.  `Lines` is the reference path; the others exist
/// to compare against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Line-by-line `split(',')` into text buffers, converted at the end.
    #[default]
    Lines,
    /// `csv` crate string records, parsed per row.
    CsvRecords,
    /// `csv` crate deserializing each row into a typed `Record`.
    CsvSerde,
    /// Split every line into owned strings, no numeric conversion.
    SplitAll,
}

/// Result of a load, depending on the strategy.
#[derive(Debug)]
pub enum LoadOutcome {
    Coordinates(Coordinates),
    /// Every line of the file (header included), split on `,`.
    Fields(Vec<Vec<String>>),
}

impl LoadOutcome {
    /// Data rows for coordinates, all lines for raw fields.
    pub fn rows(&self) -> usize {
        match self {
            LoadOutcome::Coordinates(c) => c.len(),
            LoadOutcome::Fields(f) => f.len(),
        }
    }
}

/// Load `path` with the given strategy.
pub fn load(path: &Path, strategy: Strategy) -> Result<LoadOutcome, LoadError> {
    // Called inside the timed section: keep logging at debug or below.
    log::debug!("loading {} ({strategy:?})", path.display());
    Ok(match strategy {
        Strategy::Lines => LoadOutcome::Coordinates(load_lines(path)?),
        Strategy::CsvRecords => LoadOutcome::Coordinates(load_csv_records(path)?),
        Strategy::CsvSerde => LoadOutcome::Coordinates(load_csv_serde(path)?),
        Strategy::SplitAll => LoadOutcome::Fields(load_split_all(path)?),
    })
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Line splitter
// ---------------------------------------------------------------------------

/// Skip the header, take fields 3 and 4 of every other line as text, then
/// convert both columns to `f64` in one pass.
///
/// Fields are found by position only; the header is never inspected.
pub fn load_lines(path: &Path) -> Result<Coordinates, LoadError> {
    let mut lines = BufReader::new(open(path)?).lines();

    match lines.next() {
        Some(header) => {
            let header = header.map_err(|source| LoadError::Read { line: 1, source })?;
            log::debug!("header: {header}");
        }
        None => {
            return Err(LoadError::MissingHeader {
                path: path.to_path_buf(),
            })
        }
    }

    let mut buffers = ColumnBuffers::new();
    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;
        let line = line.trim_end();

        let mut fields = line.split(',');
        match (fields.nth(LAT_FIELD), fields.next()) {
            (Some(lat), Some(long)) => buffers.push(lat, long),
            _ => {
                return Err(LoadError::MissingField {
                    line: line_no,
                    expected: MIN_FIELDS,
                    found: line.split(',').count(),
                })
            }
        }
    }

    log::debug!("collected {} rows, converting", buffers.len());
    buffers.into_coordinates()
}

// ---------------------------------------------------------------------------
// csv crate loaders
// ---------------------------------------------------------------------------

fn open_csv(path: &Path) -> Result<csv::Reader<File>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(open(path)?);

    if reader.headers()?.is_empty() {
        return Err(LoadError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    Ok(reader)
}

/// Same positional extraction as [`load_lines`], but through the `csv`
/// parser, so quoted fields are honoured.  Values are parsed as they are read.
pub fn load_csv_records(path: &Path) -> Result<Coordinates, LoadError> {
    let mut reader = open_csv(path)?;
    let mut lat = Vec::new();
    let mut long = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let (Some(lat_text), Some(long_text)) = (record.get(LAT_FIELD), record.get(LONG_FIELD))
        else {
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row + 2);
            return Err(LoadError::MissingField {
                line,
                expected: MIN_FIELDS,
                found: record.len(),
            });
        };
        lat.push(parse_coordinate(lat_text, Column::Latitude, row)?);
        long.push(parse_coordinate(long_text, Column::Longitude, row)?);
    }

    Ok(Coordinates::from_vecs(lat, long))
}

/// Deserialize rows into [`Record`], matching columns by header name.
pub fn load_csv_serde(path: &Path) -> Result<Coordinates, LoadError> {
    let mut reader = open_csv(path)?;
    let mut lat = Vec::new();
    let mut long = Vec::new();

    for result in reader.deserialize::<Record>() {
        let record = result?;
        lat.push(record.latitude);
        long.push(record.longitude);
    }

    Ok(Coordinates::from_vecs(lat, long))
}

// ---------------------------------------------------------------------------
// Raw splitter
// ---------------------------------------------------------------------------

/// Split every line, header included, into owned fields.
pub fn load_split_all(path: &Path) -> Result<Vec<Vec<String>>, LoadError> {
    BufReader::new(open(path)?)
        .lines()
        .enumerate()
        .map(|(i, line)| -> Result<Vec<String>, LoadError> {
            let line = line.map_err(|source| LoadError::Read { line: i + 1, source })?;
            Ok(line.split(',').map(str::to_string).collect())
        })
        .collect()
}
