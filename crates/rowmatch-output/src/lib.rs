//! Export of fuzzy match results.
//!
//! A [`ResultTable`](rowmatch_model::ResultTable) is written as delimited text
//! with a `File1: {col}` header per source output column, a `File2: {col}`
//! header per target output column and a trailing `Match Score` column.
//! Exported files can be read back for verification.

mod error;
mod reader;
mod writer;

pub use error::{OutputError, Result};
pub use reader::{ExportedRow, ExportedTable, read_result_file};
pub use writer::{
    CsvWriteOptions, DEFAULT_OUTPUT_FILE, results_to_string, write_result_file, write_results,
};
