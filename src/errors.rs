use std::io;

use thiserror::Error;

use crate::types::RunId;

/// Error type for run-log bookkeeping, search configuration, and checkpoint
/// persistence failures.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("run '{run_id}' is already recorded")]
    DuplicateRun { run_id: RunId },
    #[error("run '{run_id}' was scored without any subtree labels")]
    EmptyGroups { run_id: RunId },
    #[error("run '{run_id}' reported a non-finite score: {score}")]
    NonFiniteScore { run_id: RunId, score: f64 },
    #[error("configuration error: {0}")]
    InvalidConfig(String),
    #[error("checkpoint failure: {0}")]
    Checkpoint(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("evaluation of '{run_id}' failed: {reason}")]
    Evaluation { run_id: RunId, reason: String },
}
