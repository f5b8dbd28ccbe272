//! Error types for dataset and selection handling.

use thiserror::Error;

use crate::dataset::DatasetSide;

/// Errors raised while building datasets or resolving a match configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Too few or too many key columns selected for one side.
    #[error("select between 1 and {max} columns for matching from {side} (got {count})")]
    SchemaSelection {
        side: DatasetSide,
        count: usize,
        max: usize,
    },

    /// A selected column does not exist in the dataset schema.
    #[error("column '{column}' not found in {side} dataset '{dataset}'")]
    InvalidColumn {
        side: DatasetSide,
        column: String,
        dataset: String,
    },

    /// Threshold outside the 0-100 score range.
    #[error("match score threshold must be between 0 and 100 (got {0})")]
    InvalidThreshold(u8),

    /// Schema contains a blank column name.
    #[error("dataset '{dataset}' has an empty column name at position {position}")]
    EmptyColumnName { dataset: String, position: usize },

    /// Schema contains the same column name twice.
    #[error("dataset '{dataset}' has duplicate column '{column}'")]
    DuplicateColumn { dataset: String, column: String },

    /// A row does not have one value per schema column.
    #[error("row {row} of dataset '{dataset}' has {actual} values, expected {expected}")]
    RowWidth {
        dataset: String,
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
