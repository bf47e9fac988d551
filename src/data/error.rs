//! Data layer error types
//!
//! Defines all errors that can occur while loading the predator table.

use thiserror::Error;

/// Errors that can occur while loading predator control data
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O operation failed (missing file, permissions)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    Csv(String),

    /// Header row lacks a required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A cell could not be parsed into its field type
    #[error("Parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Header present but no data rows
    #[error("Data file contains no rows")]
    Empty,
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => DataError::Io(io),
            csv::ErrorKind::Deserialize { pos, err } => DataError::Parse {
                line: pos.map(|p| p.line()).unwrap_or(0),
                message: err.to_string(),
            },
            _ => DataError::Csv(message),
        }
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
