//! String similarity scoring for composite keys.
//!
//! Scores are integers in `0..=100`. The default measure is token-sort
//! ratio: both strings are normalized, split into tokens, sorted and rejoined,
//! then compared with the normalized Indel similarity from `rapidfuzz`.

use rapidfuzz::distance::indel;

/// Highest possible score.
pub const PERFECT_SCORE: u8 = 100;

/// A symmetric similarity measure over composite keys.
///
/// Scoring is split in two so that target keys can be prepared once per run
/// and compared many times.
pub trait Scorer {
    /// Normalizes a composite key into the form [`Scorer::compare`] expects.
    fn prepare(&self, key: &str) -> String;

    /// Scores two prepared keys. Must be symmetric and return a value in
    /// `0..=100`, with 100 for equal inputs.
    fn compare(&self, left: &str, right: &str) -> u8;

    /// Prepares and scores two raw keys.
    fn score(&self, left: &str, right: &str) -> u8 {
        self.compare(&self.prepare(left), &self.prepare(right))
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn prepare(&self, key: &str) -> String {
        (**self).prepare(key)
    }

    fn compare(&self, left: &str, right: &str) -> u8 {
        (**self).compare(left, right)
    }
}

/// Token-sort ratio.
///
/// "SMITH JOHN" and "john, smith" both prepare to `"john smith"` and score
/// 100 against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenSortRatio;

impl Scorer for TokenSortRatio {
    fn prepare(&self, key: &str) -> String {
        let cleaned: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' {
                    c
                } else {
                    ' '
                }
            })
            .collect::<String>()
            .to_lowercase();
        let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.join(" ")
    }

    fn compare(&self, left: &str, right: &str) -> u8 {
        if left == right {
            return PERFECT_SCORE;
        }
        if left.is_empty() || right.is_empty() {
            return 0;
        }
        let similarity = indel::normalized_similarity(left.chars(), right.chars());
        to_score(similarity)
    }
}

/// Scales a similarity in `0.0..=1.0` to an integer score.
///
/// Exact halves go to the even neighbour, so 62.5 scores 62.
fn to_score(similarity: f64) -> u8 {
    let scaled = (similarity * f64::from(PERFECT_SCORE)).round_ties_even();
    scaled.clamp(0.0, f64::from(PERFECT_SCORE)) as u8
}
