use serde::{Deserialize, Serialize};

use crate::types::GroupLabel;

/// One successfully scored candidate partition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitRecord {
    /// Model-fit statistic for the candidate; lower is better.
    pub score: f64,
    /// Subtree labels making up the partition, in the order they were
    /// scheduled. The order is preserved exactly and drives expansion.
    pub groups: Vec<GroupLabel>,
}

impl FitRecord {
    /// Build a record from a score and anything yielding subtree labels.
    pub fn new<S: Into<GroupLabel>>(score: f64, groups: impl IntoIterator<Item = S>) -> Self {
        Self {
            score,
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of subtrees in this candidate, i.e. its level.
    pub fn level(&self) -> usize {
        self.groups.len()
    }
}

/// Final outcome of one scheduled evaluation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The external evaluation finished and produced a usable score.
    Scored(FitRecord),
    /// The run failed or was skipped; it contributes no evidence either way.
    NoResult,
}

impl RunOutcome {
    /// The scored record, if the run produced one.
    pub fn record(&self) -> Option<&FitRecord> {
        match self {
            RunOutcome::Scored(record) => Some(record),
            RunOutcome::NoResult => None,
        }
    }

    /// True when the run produced a usable score.
    pub fn is_scored(&self) -> bool {
        matches!(self, RunOutcome::Scored(_))
    }
}
