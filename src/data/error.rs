use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

use super::model::Column;

/// Everything that can abort a load.  None of these are recovered from.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("{} is empty, expected a header line", path.display())]
    MissingHeader { path: PathBuf },

    /// `line` is 1-based and counts the header.
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingField {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// `row` is the 0-based data row (header excluded).
    #[error("row {row}: {column} value '{value}' is not a number")]
    Parse {
        column: Column,
        row: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
