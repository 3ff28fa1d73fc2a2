use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Csv2TableError {
    // Input errors
    #[error("INPUT_OPEN_FAILED: cannot open '{path}': {source}")]
    InputOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("INPUT_READ_FAILED: read error after {rows_read} row(s): {source}")]
    InputReadFailed {
        rows_read: usize,
        #[source]
        source: std::io::Error,
    },

    // Table errors
    #[error("RAGGED_ROW: row {row} has {found} field(s), expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    // Output errors
    #[error("OUTPUT_WRITE_FAILED: {0}")]
    OutputWriteFailed(#[from] std::io::Error),
}

impl Csv2TableError {
    /// Upper-snake error code carried at the start of every message
    pub fn code(&self) -> &'static str {
        match self {
            Csv2TableError::InputOpenFailed { .. } => "INPUT_OPEN_FAILED",
            Csv2TableError::InputReadFailed { .. } => "INPUT_READ_FAILED",
            Csv2TableError::RaggedRow { .. } => "RAGGED_ROW",
            Csv2TableError::OutputWriteFailed(_) => "OUTPUT_WRITE_FAILED",
        }
    }
}

pub type Result<T> = std::result::Result<T, Csv2TableError>;
