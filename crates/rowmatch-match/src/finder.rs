//! Best-match search over a prepared target dataset.

use rowmatch_model::Dataset;

use crate::key::RowKeyBuilder;
use crate::score::{PERFECT_SCORE, Scorer};

/// Target keys computed once per run, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct TargetIndex {
    keys: Vec<String>,
    prepared: Vec<String>,
}

impl TargetIndex {
    /// Builds and prepares the composite key of every target row.
    pub fn build<S: Scorer>(dataset: &Dataset, keys: &RowKeyBuilder, scorer: &S) -> Self {
        let keys: Vec<String> = dataset.rows().iter().map(|row| keys.key(row)).collect();
        let prepared = keys.iter().map(|key| scorer.prepare(key)).collect();
        Self { keys, prepared }
    }

    /// Composite key of a target row.
    pub fn key(&self, row: usize) -> Option<&str> {
        self.keys.get(row).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Best target row for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch {
    /// Position of the row in the target dataset.
    pub target_row: usize,
    /// Similarity score in `0..=100`.
    pub score: u8,
}

/// Finds the best-scoring target row for a composite key.
#[derive(Debug, Clone)]
pub struct BestMatchFinder<S> {
    scorer: S,
    threshold: u8,
}

impl<S: Scorer> BestMatchFinder<S> {
    pub fn new(scorer: S, threshold: u8) -> Self {
        Self { scorer, threshold }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Highest-scoring target row, regardless of threshold.
    ///
    /// Ties go to the first row in dataset order. Returns `None` only for an
    /// empty index.
    pub fn best(&self, query: &str, targets: &TargetIndex) -> Option<BestMatch> {
        let query = self.scorer.prepare(query);
        let mut best: Option<BestMatch> = None;
        for (target_row, candidate) in targets.prepared.iter().enumerate() {
            let score = self.scorer.compare(&query, candidate);
            if best.is_none_or(|b| score > b.score) {
                best = Some(BestMatch { target_row, score });
                if score == PERFECT_SCORE {
                    break;
                }
            }
        }
        best
    }

    /// Best target row if its score reaches the threshold.
    pub fn find(&self, query: &str, targets: &TargetIndex) -> Option<BestMatch> {
        self.best(query, targets)
            .filter(|best| best.score >= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::TokenSortRatio;
    use rowmatch_model::{CellValue, DatasetSide};

    fn schools(names: &[&str]) -> (Dataset, RowKeyBuilder) {
        let dataset = Dataset::from_rows(
            "nces.csv",
            vec!["School".to_string()],
            names.iter().map(|n| vec![CellValue::from(*n)]),
        )
        .unwrap();
        let keys =
            RowKeyBuilder::new(&dataset, DatasetSide::Target, &["School".to_string()]).unwrap();
        (dataset, keys)
    }

    #[test]
    fn test_best_picks_highest_score() {
        let (dataset, keys) = schools(&["ADAMS MIDDLE", "LINCOLN ELEM", "WASHINGTON HIGH"]);
        let index = TargetIndex::build(&dataset, &keys, &TokenSortRatio);
        let finder = BestMatchFinder::new(TokenSortRatio, 80);

        let best = finder.best("LINCOLN ELEMENTARY", &index).unwrap();
        assert_eq!(best.target_row, 1);
        assert_eq!(index.key(best.target_row), Some("LINCOLN ELEM"));
    }

    #[test]
    fn test_ties_go_to_first_row() {
        let (dataset, keys) = schools(&["ADAMS", "LINCOLN", "lincoln", "LINCOLN"]);
        let index = TargetIndex::build(&dataset, &keys, &TokenSortRatio);
        let finder = BestMatchFinder::new(TokenSortRatio, 0);

        let best = finder.find("Lincoln", &index).unwrap();
        assert_eq!(best, BestMatch { target_row: 1, score: 100 });
    }

    #[test]
    fn test_ties_below_perfect_go_to_first_row() {
        let (dataset, keys) = schools(&["LINCOLX", "LINCOLY"]);
        let index = TargetIndex::build(&dataset, &keys, &TokenSortRatio);
        let finder = BestMatchFinder::new(TokenSortRatio, 0);

        let best = finder.find("LINCOLN", &index).unwrap();
        assert_eq!(best.target_row, 0);
        assert!(best.score < 100);
    }

    #[test]
    fn test_threshold_filters_best() {
        let (dataset, keys) = schools(&["LINCOLN ELEM"]);
        let index = TargetIndex::build(&dataset, &keys, &TokenSortRatio);

        let strict = BestMatchFinder::new(TokenSortRatio, 100);
        assert_eq!(strict.find("LINCOLN ELEMENTARY", &index), None);
        assert!(strict.best("LINCOLN ELEMENTARY", &index).is_some());

        let lenient = BestMatchFinder::new(TokenSortRatio, 80);
        assert!(lenient.find("LINCOLN ELEMENTARY", &index).is_some());
    }

    #[test]
    fn test_empty_target_never_matches() {
        let (dataset, keys) = schools(&[]);
        let index = TargetIndex::build(&dataset, &keys, &TokenSortRatio);
        assert!(index.is_empty());

        let finder = BestMatchFinder::new(TokenSortRatio, 0);
        assert_eq!(finder.best("LINCOLN", &index), None);
        assert_eq!(finder.find("LINCOLN", &index), None);
    }
}
