use crate::runlog::RunLog;

/// Decide whether partitioning into `level` subtrees improved model fit over
/// `level - 1`.
///
/// The comparison is strict: the lowest score among scored `level` records
/// must be below the lowest score among scored `level - 1` records. Ties do
/// not count. A level where every run failed yields `false`, and so does a
/// level with no `level - 1` baseline at all: without a baseline there is no
/// evidence the extra split helped, and answering `true` would keep the
/// search splitting forever.
///
/// Pure query; reads only the stored scores, never the run identifiers.
pub fn improved(log: &RunLog, level: usize) -> bool {
    let current = log.min_score_at(level);
    let previous = level
        .checked_sub(1)
        .and_then(|baseline| log.min_score_at(baseline));
    match (current, previous) {
        (Some(current), Some(previous)) => current < previous,
        _ => false,
    }
}
