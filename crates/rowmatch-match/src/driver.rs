//! Matching run over a pair of datasets.

use std::time::Instant;

use rowmatch_model::{Dataset, DatasetSide, MatchConfig, MatchResult, Result, ResultTable};
use tracing::{debug, info, info_span, trace};

use crate::finder::{BestMatchFinder, TargetIndex};
use crate::key::RowKeyBuilder;
use crate::score::{Scorer, TokenSortRatio};

/// Progress after one source row has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchProgress {
    /// Source rows processed so far.
    pub processed: usize,
    /// Total number of source rows.
    pub total: usize,
    /// Accepted matches so far.
    pub matched: usize,
}

/// Runs best-match search for every source row.
#[derive(Debug, Clone, Default)]
pub struct Matcher<S = TokenSortRatio> {
    scorer: S,
}

impl Matcher {
    /// Matcher using token-sort ratio.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Scorer> Matcher<S> {
    /// Matcher using a custom similarity measure.
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Matches every source row against the target dataset.
    pub fn run(
        &self,
        source: &Dataset,
        target: &Dataset,
        config: &MatchConfig,
    ) -> Result<ResultTable> {
        self.run_with_progress(source, target, config, |_| {})
    }

    /// Like [`Matcher::run`], reporting progress after each source row.
    ///
    /// The configuration and every column selection are checked before the
    /// first comparison; any error aborts the run without partial results.
    pub fn run_with_progress<F>(
        &self,
        source: &Dataset,
        target: &Dataset,
        config: &MatchConfig,
        mut on_progress: F,
    ) -> Result<ResultTable>
    where
        F: FnMut(MatchProgress),
    {
        let span = info_span!(
            "match",
            source = source.name(),
            target = target.name(),
            threshold = config.threshold
        );
        let _guard = span.enter();
        let start = Instant::now();

        config.validate()?;
        let source_keys = RowKeyBuilder::new(
            source,
            DatasetSide::Source,
            config.key_columns(DatasetSide::Source),
        )?;
        let target_keys = RowKeyBuilder::new(
            target,
            DatasetSide::Target,
            config.key_columns(DatasetSide::Target),
        )?;
        let source_output = source.select(
            DatasetSide::Source,
            config.output_columns(DatasetSide::Source),
        )?;
        let target_output = target.select(
            DatasetSide::Target,
            config.output_columns(DatasetSide::Target),
        )?;

        let index = TargetIndex::build(target, &target_keys, &self.scorer);
        debug!(
            source_keys = ?source_keys.columns(),
            target_keys = ?target_keys.columns(),
            targets = index.len(),
            "prepared target keys"
        );

        let finder = BestMatchFinder::new(&self.scorer, config.threshold);
        let mut table = ResultTable::new(
            source_output.names().to_vec(),
            target_output.names().to_vec(),
        );
        let total = source.len();
        for (source_row, row) in source.rows().iter().enumerate() {
            let query = source_keys.key(row);
            match finder.find(&query, &index) {
                Some(best) => {
                    trace!(
                        source_row,
                        target_row = best.target_row,
                        score = best.score,
                        "accepted"
                    );
                    let matched = &target.rows()[best.target_row];
                    table.push(MatchResult {
                        source_row,
                        target_row: best.target_row,
                        source_values: source_output.project(row),
                        target_values: target_output.project(matched),
                        score: best.score,
                    });
                }
                None => trace!(source_row, "no match"),
            }
            on_progress(MatchProgress {
                processed: source_row + 1,
                total,
                matched: table.len(),
            });
        }

        info!(
            source_rows = total,
            target_rows = target.len(),
            matched = table.len(),
            unmatched = total - table.len(),
            duration_ms = start.elapsed().as_millis(),
            "matching complete"
        );
        Ok(table)
    }
}

/// Matches two datasets with token-sort ratio.
pub fn match_datasets(
    source: &Dataset,
    target: &Dataset,
    config: &MatchConfig,
) -> Result<ResultTable> {
    Matcher::new().run(source, target, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmatch_model::{CellValue, ModelError};

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn source() -> Dataset {
        Dataset::from_rows(
            "montage.csv",
            names(&["Name", "City", "Id"]),
            vec![
                vec![
                    CellValue::from("Lincoln Elementary"),
                    CellValue::from("Springfield"),
                    CellValue::Integer(1),
                ],
                vec![
                    CellValue::from("Zzyzx Academy"),
                    CellValue::from("Nowhere"),
                    CellValue::Integer(2),
                ],
                vec![
                    CellValue::from("Adams Middle"),
                    CellValue::from("Quincy"),
                    CellValue::Integer(3),
                ],
            ],
        )
        .unwrap()
    }

    fn target() -> Dataset {
        Dataset::from_rows(
            "nces.csv",
            names(&["School", "Town", "NCES_ID"]),
            vec![
                vec![
                    CellValue::from("ADAMS MIDDLE"),
                    CellValue::from("QUINCY"),
                    CellValue::Integer(250001),
                ],
                vec![
                    CellValue::from("LINCOLN ELEM"),
                    CellValue::from("SPRINGFIELD"),
                    CellValue::Integer(170993),
                ],
            ],
        )
        .unwrap()
    }

    fn config() -> MatchConfig {
        MatchConfig::new(names(&["Name", "City"]), names(&["School", "Town"]))
            .with_source_output(names(&["Id", "Name"]))
            .with_target_output(names(&["NCES_ID"]))
    }

    #[test]
    fn test_run_emits_accepted_matches_in_source_order() {
        let table = match_datasets(&source(), &target(), &config()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].source_row, 0);
        assert_eq!(table.rows()[0].target_row, 1);
        assert_eq!(table.rows()[1].source_row, 2);
        assert_eq!(table.rows()[1].target_row, 0);
        assert_eq!(table.rows()[1].score, 100);
        assert_eq!(
            table.headers(),
            vec!["File1: Id", "File1: Name", "File2: NCES_ID", "Match Score"]
        );
        assert_eq!(
            table.rows()[0].render(),
            vec!["1", "Lincoln Elementary", "170993", "89"]
        );
    }

    #[test]
    fn test_target_values_come_from_matched_row() {
        let table = match_datasets(&source(), &target(), &config()).unwrap();

        assert_eq!(
            table.rows()[0].target_values,
            vec![CellValue::Integer(170993)]
        );
        assert_eq!(
            table.rows()[1].target_values,
            vec![CellValue::Integer(250001)]
        );
    }

    #[test]
    fn test_repeated_key_column_matches_doubled_target() {
        let source = Dataset::from_rows(
            "montage.csv",
            names(&["Name"]),
            vec![vec![CellValue::from("Lincoln")]],
        )
        .unwrap();
        let target = Dataset::from_rows(
            "nces.csv",
            names(&["School"]),
            vec![
                vec![CellValue::from("LINCOLN")],
                vec![CellValue::from("LINCOLN LINCOLN")],
            ],
        )
        .unwrap();
        let config = MatchConfig::new(names(&["Name", "Name"]), names(&["School"]))
            .with_threshold(100);

        let table = match_datasets(&source, &target, &config).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].target_row, 1);
        assert_eq!(table.rows()[0].score, 100);
    }

    #[test]
    fn test_progress_reports_every_source_row() {
        let mut seen = Vec::new();
        Matcher::new()
            .run_with_progress(&source(), &target(), &config(), |p| seen.push(p))
            .unwrap();

        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen.last(),
            Some(&MatchProgress {
                processed: 3,
                total: 3,
                matched: 2
            })
        );
        assert_eq!(seen[1].matched, 1);
    }

    #[test]
    fn test_invalid_output_column_fails_before_matching() {
        let config = config().with_target_output(names(&["District"]));
        let mut calls = 0;
        let err = Matcher::new()
            .run_with_progress(&source(), &target(), &config, |_| calls += 1)
            .unwrap_err();

        assert!(matches!(
            err,
            ModelError::InvalidColumn {
                side: DatasetSide::Target,
                ..
            }
        ));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let err = match_datasets(&source(), &target(), &config().with_threshold(150)).unwrap_err();
        assert_eq!(err, ModelError::InvalidThreshold(150));
    }

    #[test]
    fn test_empty_target_yields_empty_table() {
        let empty = Dataset::new("nces.csv", names(&["School", "Town", "NCES_ID"])).unwrap();
        let table = match_datasets(&source(), &empty, &config().with_threshold(0)).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.source_columns(), ["Id", "Name"]);
    }

    #[test]
    fn test_custom_scorer() {
        struct Exact;
        impl Scorer for Exact {
            fn prepare(&self, key: &str) -> String {
                key.to_string()
            }
            fn compare(&self, left: &str, right: &str) -> u8 {
                if left == right { 100 } else { 0 }
            }
        }

        let table = Matcher::with_scorer(Exact)
            .run(&source(), &target(), &config())
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].source_row, 2);
    }
}
