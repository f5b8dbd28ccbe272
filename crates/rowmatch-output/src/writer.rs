//! Writing result tables as delimited text.

use std::fs;
use std::io;
use std::path::Path;

use csv::WriterBuilder;
use rowmatch_model::ResultTable;
use tracing::info;

use crate::error::{OutputError, Result};

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "matched_results.csv";

/// Options for delimited-text export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvWriteOptions {
    /// Field separator.
    pub separator: u8,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self { separator: b',' }
    }
}

impl CsvWriteOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }
}

/// Writes the header row and one record per match to `writer`.
///
/// Fields are quoted only when they contain the separator, a quote or a
/// line break.
pub fn write_results<W: io::Write>(
    table: &ResultTable,
    writer: W,
    options: &CsvWriteOptions,
) -> Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(options.separator)
        .from_writer(writer);
    out.write_record(table.headers())?;
    for record in table.rows() {
        out.write_record(record.render())?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Renders a result table to a string.
pub fn results_to_string(table: &ResultTable, options: &CsvWriteOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_results(table, &mut buffer, options)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes a result table to `path`, creating parent directories as needed.
///
/// An existing file is replaced.
pub fn write_result_file(
    table: &ResultTable,
    path: &Path,
    options: &CsvWriteOptions,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = fs::File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_results(table, io::BufWriter::new(file), options).map_err(|err| match err {
        OutputError::Encode(source) => OutputError::Csv {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!(
        path = %path.display(),
        rows = table.len(),
        "wrote match results"
    );
    Ok(())
}
