//! Session-scoped configuration for a matching run.

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetSide;
use crate::error::{ModelError, Result};

/// Maximum number of columns combined into a composite key per side.
pub const MAX_KEY_COLUMNS: usize = 3;

/// Threshold applied when none is configured.
pub const DEFAULT_THRESHOLD: u8 = 80;

/// Highest attainable match score.
pub const MAX_THRESHOLD: u8 = 100;

/// Column selections and threshold for one matching run.
///
/// Loaded from a TOML file or assembled from command-line flags, then passed
/// explicitly into the matcher.
///
/// ```toml
/// source_key_columns = ["Name", "City"]
/// target_key_columns = ["School", "Town"]
/// source_output_columns = ["Name"]
/// target_output_columns = ["NCES_ID"]
/// threshold = 85
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Ordered key columns of the source dataset (1-3).
    pub source_key_columns: Vec<String>,
    /// Ordered key columns of the target dataset (1-3).
    pub target_key_columns: Vec<String>,
    /// Source columns copied into the result, in output order.
    pub source_output_columns: Vec<String>,
    /// Target columns copied into the result, in output order.
    pub target_output_columns: Vec<String>,
    /// Minimum accepted score (0-100).
    pub threshold: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            source_key_columns: Vec::new(),
            target_key_columns: Vec::new(),
            source_output_columns: Vec::new(),
            target_output_columns: Vec::new(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MatchConfig {
    pub fn new(source_key_columns: Vec<String>, target_key_columns: Vec<String>) -> Self {
        Self {
            source_key_columns,
            target_key_columns,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_source_output(mut self, columns: Vec<String>) -> Self {
        self.source_output_columns = columns;
        self
    }

    #[must_use]
    pub fn with_target_output(mut self, columns: Vec<String>) -> Self {
        self.target_output_columns = columns;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn key_columns(&self, side: DatasetSide) -> &[String] {
        match side {
            DatasetSide::Source => &self.source_key_columns,
            DatasetSide::Target => &self.target_key_columns,
        }
    }

    pub fn output_columns(&self, side: DatasetSide) -> &[String] {
        match side {
            DatasetSide::Source => &self.source_output_columns,
            DatasetSide::Target => &self.target_output_columns,
        }
    }

    /// Checks selection sizes and the threshold range.
    ///
    /// Column existence is checked later, against the loaded datasets.
    pub fn validate(&self) -> Result<()> {
        for side in [DatasetSide::Source, DatasetSide::Target] {
            let count = self.key_columns(side).len();
            if count == 0 || count > MAX_KEY_COLUMNS {
                return Err(ModelError::SchemaSelection {
                    side,
                    count,
                    max: MAX_KEY_COLUMNS,
                });
            }
        }
        if self.threshold > MAX_THRESHOLD {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}
