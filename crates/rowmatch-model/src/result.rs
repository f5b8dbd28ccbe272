//! Accepted matches and the table they are collected into.

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetSide;
use crate::value::CellValue;

/// Header of the score column in every result table.
pub const MATCH_SCORE_COLUMN: &str = "Match Score";

/// One accepted match between a source row and its best target row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Position of the source row in the source dataset.
    pub source_row: usize,
    /// Position of the matched row in the target dataset.
    pub target_row: usize,
    /// Source output values, verbatim, in output column order.
    pub source_values: Vec<CellValue>,
    /// Target output values, verbatim, in output column order.
    pub target_values: Vec<CellValue>,
    /// Similarity score in `0..=100`.
    pub score: u8,
}

impl MatchResult {
    /// Renders the record as text cells aligned with [`ResultTable::headers`].
    pub fn render(&self) -> Vec<String> {
        self.source_values
            .iter()
            .chain(&self.target_values)
            .map(CellValue::render)
            .chain(std::iter::once(self.score.to_string()))
            .collect()
    }
}

/// Ordered matches, one per source row that had an accepted match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultTable {
    source_columns: Vec<String>,
    target_columns: Vec<String>,
    rows: Vec<MatchResult>,
}

impl ResultTable {
    pub fn new(source_columns: Vec<String>, target_columns: Vec<String>) -> Self {
        Self {
            source_columns,
            target_columns,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, result: MatchResult) {
        debug_assert_eq!(result.source_values.len(), self.source_columns.len());
        debug_assert_eq!(result.target_values.len(), self.target_columns.len());
        self.rows.push(result);
    }

    pub fn source_columns(&self) -> &[String] {
        &self.source_columns
    }

    pub fn target_columns(&self) -> &[String] {
        &self.target_columns
    }

    pub fn rows(&self) -> &[MatchResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Output header: `File1: {col}`..., `File2: {col}`..., `Match Score`.
    pub fn headers(&self) -> Vec<String> {
        self.source_columns
            .iter()
            .map(|c| DatasetSide::Source.output_header(c))
            .chain(
                self.target_columns
                    .iter()
                    .map(|c| DatasetSide::Target.output_header(c)),
            )
            .chain(std::iter::once(MATCH_SCORE_COLUMN.to_string()))
            .collect()
    }

    /// Mean score of all matches, if any.
    pub fn mean_score(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let total: u64 = self.rows.iter().map(|r| u64::from(r.score)).sum();
        Some(total as f64 / self.rows.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ResultTable {
        let mut table = ResultTable::new(
            vec!["Name".to_string(), "City".to_string()],
            vec!["NCES_ID".to_string()],
        );
        table.push(MatchResult {
            source_row: 0,
            target_row: 3,
            source_values: vec![CellValue::from("Lincoln Elementary"), CellValue::Missing],
            target_values: vec![CellValue::Integer(170993000)],
            score: 87,
        });
        table.push(MatchResult {
            source_row: 2,
            target_row: 0,
            source_values: vec![CellValue::from("Adams"), CellValue::from("Quincy")],
            target_values: vec![CellValue::Float(12.5)],
            score: 100,
        });
        table
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            table().headers(),
            vec!["File1: Name", "File1: City", "File2: NCES_ID", "Match Score"]
        );
    }

    #[test]
    fn test_headers_without_output_columns() {
        let table = ResultTable::new(Vec::new(), Vec::new());
        assert_eq!(table.headers(), vec!["Match Score"]);
    }

    #[test]
    fn test_render_record() {
        let table = table();
        assert_eq!(
            table.rows()[0].render(),
            vec!["Lincoln Elementary", "", "170993000", "87"]
        );
        assert_eq!(table.rows()[1].render(), vec!["Adams", "Quincy", "12.5", "100"]);
    }

    #[test]
    fn test_mean_score() {
        assert_eq!(table().mean_score(), Some(93.5));
        assert_eq!(ResultTable::default().mean_score(), None);
    }
}
