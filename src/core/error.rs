//! Error types for dataset loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PenguinsError {
    #[error("Resource not found: {}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Length mismatch in column '{column}': expected {expected}, got {actual}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<csv::Error> for PenguinsError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => PenguinsError::IoError(e),
            _ => PenguinsError::ParseError(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, PenguinsError>;
