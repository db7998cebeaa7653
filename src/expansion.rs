use crate::constants::expansion::{FIRST_CHILD_MARKER, SECOND_CHILD_MARKER};
use crate::runlog::RunLog;
use crate::types::GroupLabel;

/// Derive the two child subtree labels obtained by splitting `label`.
///
/// Children are always distinct from each other and from the parent.
pub fn split_label(label: &str) -> (GroupLabel, GroupLabel) {
    (
        format!("{label}{FIRST_CHILD_MARKER}"),
        format!("{label}{SECOND_CHILD_MARKER}"),
    )
}

/// Enumerate every candidate partition reachable by splitting exactly one
/// subtree of a scored `level`-subtree candidate.
///
/// Entries are visited in log insertion order; within one entry, split
/// positions left to right. Each emitted candidate keeps the untouched
/// labels in their original relative order and appends the split target's
/// two children last. Runs without a result and entries at other levels
/// contribute nothing. Identical candidates arising from different entries
/// are all emitted; deduplication is the caller's choice.
pub fn expand(log: &RunLog, level: usize) -> Vec<Vec<GroupLabel>> {
    let mut candidates = Vec::new();
    for record in log.scored_at_level(level) {
        for (position, target) in record.groups.iter().enumerate() {
            let mut groups: Vec<GroupLabel> = Vec::with_capacity(record.groups.len() + 1);
            groups.extend(
                record
                    .groups
                    .iter()
                    .enumerate()
                    .filter(|(other, _)| *other != position)
                    .map(|(_, label)| label.clone()),
            );
            let (first, second) = split_label(target);
            groups.push(first);
            groups.push(second);
            candidates.push(groups);
        }
    }
    candidates
}
