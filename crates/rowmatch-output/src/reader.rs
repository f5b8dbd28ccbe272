//! Reading exported result files back.

use std::path::Path;

use csv::ReaderBuilder;
use rowmatch_model::MATCH_SCORE_COLUMN;

use crate::error::{OutputError, Result};

/// One record of an exported result file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedRow {
    /// Output column values as written, excluding the score.
    pub values: Vec<String>,
    pub score: u8,
}

/// Contents of an exported result file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportedTable {
    /// Header row, `Match Score` included.
    pub headers: Vec<String>,
    pub rows: Vec<ExportedRow>,
}

/// Reads a result file written by [`crate::write_result_file`].
pub fn read_result_file(path: &Path, separator: u8) -> Result<ExportedTable> {
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(separator)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    match headers.last() {
        Some(last) if last == MATCH_SCORE_COLUMN => {}
        last => {
            return Err(OutputError::MissingScoreColumn {
                path: path.to_path_buf(),
                found: last.cloned().unwrap_or_default(),
            });
        }
    }

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let mut values: Vec<String> = record.iter().map(ToString::to_string).collect();
        let raw_score = values.pop().unwrap_or_default();
        let score = raw_score
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|s| *s <= 100)
            .ok_or_else(|| OutputError::InvalidScore {
                path: path.to_path_buf(),
                row,
                value: raw_score.clone(),
            })?;
        rows.push(ExportedRow { values, score });
    }
    Ok(ExportedTable { headers, rows })
}
