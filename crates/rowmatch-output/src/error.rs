//! Error types for result export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing or re-reading a result file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or reading delimited text failed.
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Writing delimited text to an in-memory or caller-supplied writer failed.
    #[error("CSV error: {0}")]
    Encode(#[from] csv::Error),

    /// The output file could not be created.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A result file has no `Match Score` as its last column.
    #[error("{path} is not a match result file: last column is '{found}', expected 'Match Score'")]
    MissingScoreColumn { path: PathBuf, found: String },

    /// A score cell is not an integer in `0..=100`.
    #[error("invalid match score '{value}' in row {row} of {path}")]
    InvalidScore {
        path: PathBuf,
        row: usize,
        value: String,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
