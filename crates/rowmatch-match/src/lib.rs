//! Fuzzy row matching.
//!
//! For every row of a source [`Dataset`](rowmatch_model::Dataset) this crate
//! finds the most similar row of a target dataset:
//!
//! - **Keys**: selected column values joined into an uppercase composite key
//! - **Scoring**: token-sort ratio over composite keys, 0 to 100
//! - **Search**: first maximal-scoring target row, accepted at or above the
//!   threshold
//! - **Driver**: one [`MatchResult`](rowmatch_model::MatchResult) per accepted
//!   source row, in source order
//!
//! # Example
//!
//! ```ignore
//! use rowmatch_match::match_datasets;
//! use rowmatch_model::MatchConfig;
//!
//! let config = MatchConfig::new(vec!["Name".into()], vec!["School".into()]).with_threshold(85);
//! let table = match_datasets(&source, &target, &config)?;
//! println!("{} of {} rows matched", table.len(), source.len());
//! ```

mod driver;
mod finder;
mod key;
mod score;

pub use driver::{MatchProgress, Matcher, match_datasets};
pub use finder::{BestMatch, BestMatchFinder, TargetIndex};
pub use key::{RowKeyBuilder, composite_key};
pub use score::{PERFECT_SCORE, Scorer, TokenSortRatio};
