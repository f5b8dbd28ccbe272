//! Data model for fuzzy row matching.
//!
//! This crate holds the types shared by every stage of a matching run:
//!
//! - **Datasets**: ordered rows of [`CellValue`]s under a named column schema
//! - **Selections**: key and output columns resolved against a schema
//! - **Configuration**: the session-scoped [`MatchConfig`]
//! - **Results**: [`MatchResult`] records collected into a [`ResultTable`]

pub mod config;
pub mod dataset;
pub mod error;
pub mod result;
pub mod value;

pub use config::{DEFAULT_THRESHOLD, MAX_KEY_COLUMNS, MAX_THRESHOLD, MatchConfig};
pub use dataset::{ColumnSelection, Dataset, DatasetSide, Row};
pub use error::{ModelError, Result};
pub use result::{MATCH_SCORE_COLUMN, MatchResult, ResultTable};
pub use value::{CellValue, format_numeric};
