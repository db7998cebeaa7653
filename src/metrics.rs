use std::collections::BTreeMap;

use crate::runlog::RunLog;

/// Aggregate progress metrics over one search's run log.
#[derive(Clone, Debug, PartialEq)]
pub struct LogSummary {
    pub runs: usize,
    pub unscored: usize,
    pub levels: Vec<LevelSummary>,
}

/// Per-level slice of a [`LogSummary`].
#[derive(Clone, Debug, PartialEq)]
pub struct LevelSummary {
    pub level: usize,
    pub scored: usize,
    pub best_score: f64,
}

/// Compute per-level progress metrics from a run log.
///
/// Levels are reported in ascending order. Runs without a result carry no
/// level information and are counted once under `unscored`. Returns `None`
/// for an empty log.
pub fn summarize(log: &RunLog) -> Option<LogSummary> {
    if log.is_empty() {
        return None;
    }
    let mut unscored = 0usize;
    let mut levels: BTreeMap<usize, LevelSummary> = BTreeMap::new();
    for (_, outcome) in log.iter() {
        match outcome.record() {
            None => unscored += 1,
            Some(record) => {
                let entry = levels.entry(record.level()).or_insert(LevelSummary {
                    level: record.level(),
                    scored: 0,
                    best_score: record.score,
                });
                entry.scored += 1;
                if record.score < entry.best_score {
                    entry.best_score = record.score;
                }
            }
        }
    }
    Some(LogSummary {
        runs: log.len(),
        unscored,
        levels: levels.into_values().collect(),
    })
}
