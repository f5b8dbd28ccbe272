//! Data ingestion for fuzzy row matching.
//!
//! This crate loads delimited-text input files into [`Dataset`]s:
//!
//! - **Validation**: size limit, UTF-8 only, non-empty header row
//! - **Parsing**: Polars CSV reader with whole-file type inference
//! - **Conversion**: Polars values to [`rowmatch_model::CellValue`]
//! - **Summaries**: per-column type, missing count and sample value
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rowmatch_ingest::{CsvOptions, load_dataset};
//!
//! let source = load_dataset(Path::new("montage.csv"), &CsvOptions::default())?;
//! println!("{} rows, columns {:?}", source.len(), source.columns());
//! ```

mod convert;
mod csv;
mod error;
mod summary;

use std::path::Path;
use std::time::Instant;

use rowmatch_model::Dataset;
use tracing::{debug, info};

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvHeaders, CsvOptions, MAX_CSV_FILE_SIZE, check_file_size, read_csv_frame, read_csv_schema,
    validate_encoding,
};

// === Conversion ===
pub use convert::{any_to_cell, frame_to_dataset};

// === Column Summaries ===
pub use summary::{ColumnSummary, summarize_columns};

/// Loads a delimited file into a dataset.
///
/// Any failure is fatal: no partially loaded dataset is returned.
pub fn load_dataset(path: &Path, options: &CsvOptions) -> Result<Dataset> {
    let start = Instant::now();
    let df = read_csv_frame(path, options)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "parsed csv"
    );
    let dataset = frame_to_dataset(&df, path)?;
    if dataset.is_empty() {
        tracing::warn!(path = %path.display(), "dataset has a header but no rows");
    }
    info!(
        dataset = dataset.name(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}
