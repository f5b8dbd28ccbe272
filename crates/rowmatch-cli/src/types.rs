use std::path::PathBuf;
use std::time::Duration;

use rowmatch_model::{MatchConfig, ResultTable};

/// Outcome of a completed `run` command.
#[derive(Debug)]
pub struct RunOutcome {
    pub source: DatasetInfo,
    pub target: DatasetInfo,
    pub config: MatchConfig,
    pub table: ResultTable,
    pub output: PathBuf,
    pub duration: Duration,
}

impl RunOutcome {
    /// Source rows without an accepted match.
    pub fn unmatched(&self) -> usize {
        self.source.rows.saturating_sub(self.table.len())
    }
}

/// An input file as loaded for a run.
#[derive(Debug, Clone)]
pub struct DatasetInfo {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}
