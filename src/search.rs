use tracing::{debug, info, warn};

use crate::checkpoint::FileCheckpoint;
use crate::config::SearchConfig;
use crate::data::{FitRecord, RunOutcome};
use crate::errors::SearchError;
use crate::expansion::expand;
use crate::runlog::RunLog;
use crate::selection::improved;
use crate::types::{GroupLabel, RunId};

/// External evaluation step for one candidate partition.
///
/// Implementations run the actual model fit (typically out of process) and
/// report either a scored record or [`RunOutcome::NoResult`] when the run
/// failed in a way the search should tolerate. Infrastructure failures that
/// should abort the whole search are returned as errors instead.
pub trait CandidateEvaluator {
    /// Evaluate the candidate made up of `groups` and report its outcome.
    ///
    /// `run_id` is the identifier the outcome will be recorded under; it is
    /// provided for logging and working-directory naming only.
    fn evaluate(&mut self, run_id: &str, groups: &[GroupLabel])
        -> Result<RunOutcome, SearchError>;
}

/// Why a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The next level produced no score below the current level's best.
    NoImprovement,
    /// No scored candidates were available to expand.
    NoCandidates,
    /// The configured subtree cap was reached.
    LevelCapReached,
}

/// Outcome of a completed search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
    /// Every run scheduled across all levels, in scheduling order.
    pub log: RunLog,
    /// Subtree count of the last accepted partitioning.
    pub accepted_level: usize,
    /// Best-scoring record at the accepted level, if any run there succeeded.
    pub best: Option<FitRecord>,
    /// Why the search stopped.
    pub stopped: StopReason,
}

/// Drives the incremental partition search: evaluate the base partition, then
/// repeatedly expand the current level and keep splitting while the fit
/// improves.
pub struct SubtreeSearch {
    config: SearchConfig,
    checkpoint: Option<FileCheckpoint>,
}

impl SubtreeSearch {
    /// Create a driver from a validated configuration.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            config: config.validated()?,
            checkpoint: None,
        })
    }

    /// Persist the run log through `store` after every recorded outcome, and
    /// resume from its snapshot when one exists.
    pub fn with_checkpoint(mut self, store: FileCheckpoint) -> Self {
        self.checkpoint = Some(store);
        self
    }

    /// Run the search to completion.
    ///
    /// With a checkpoint attached, the snapshot left by an earlier
    /// interrupted run is loaded first; runs already recorded there are not
    /// re-evaluated.
    pub fn run<E: CandidateEvaluator>(
        &self,
        evaluator: &mut E,
    ) -> Result<SearchReport, SearchError> {
        let log = match &self.checkpoint {
            Some(store) => store.load()?.unwrap_or_default(),
            None => RunLog::new(),
        };
        self.resume(log, evaluator)
    }

    /// Run the search over an existing log, e.g. one restored by the caller.
    pub fn resume<E: CandidateEvaluator>(
        &self,
        mut log: RunLog,
        evaluator: &mut E,
    ) -> Result<SearchReport, SearchError> {
        self.schedule(&mut log, evaluator, &self.config.base_groups)?;
        let mut level = self.config.base_groups.len();
        let stopped = loop {
            if level >= self.config.max_level {
                break StopReason::LevelCapReached;
            }
            let candidates = expand(&log, level);
            if candidates.is_empty() {
                break StopReason::NoCandidates;
            }
            info!(
                level,
                candidates = candidates.len(),
                "expanding to {} subtrees",
                level + 1
            );
            for groups in &candidates {
                self.schedule(&mut log, evaluator, groups)?;
            }
            if improved(&log, level + 1) {
                level += 1;
            } else {
                break StopReason::NoImprovement;
            }
        };
        let best = log.best_at_level(level).cloned();
        info!(accepted_level = level, reason = ?stopped, "search finished");
        Ok(SearchReport {
            log,
            accepted_level: level,
            best,
            stopped,
        })
    }

    fn schedule<E: CandidateEvaluator>(
        &self,
        log: &mut RunLog,
        evaluator: &mut E,
        groups: &[GroupLabel],
    ) -> Result<(), SearchError> {
        let run_id = run_id_for(groups);
        if log.contains(&run_id) {
            debug!(%run_id, "outcome already recorded; skipping evaluation");
            return Ok(());
        }
        debug!(%run_id, level = groups.len(), "evaluating candidate");
        let outcome = evaluator.evaluate(&run_id, groups)?;
        if matches!(outcome, RunOutcome::NoResult) {
            warn!(%run_id, "run produced no usable result");
        }
        log.record(run_id, outcome)?;
        if let Some(store) = &self.checkpoint {
            store.save(log)?;
        }
        Ok(())
    }
}

/// Identifier a run is recorded under: the subtree count followed by the
/// labels. Purely descriptive; nothing in the crate reads information back
/// out of it.
fn run_id_for(groups: &[GroupLabel]) -> RunId {
    let mut id = groups.len().to_string();
    for label in groups {
        id.push('_');
        id.push_str(label);
    }
    id
}
