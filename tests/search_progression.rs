use std::collections::HashMap;

use toposplit::{
    improved, CandidateEvaluator, FitRecord, RunOutcome, SearchConfig, SearchError, StopReason,
    SubtreeSearch,
};

/// Evaluator scripted with fixed scores per candidate label set. Candidates
/// with no scripted score report [`RunOutcome::NoResult`], mirroring an
/// external run that failed or was skipped.
struct ScriptedEvaluator {
    scores: HashMap<String, f64>,
    calls: usize,
}

impl ScriptedEvaluator {
    fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            scores: entries
                .iter()
                .map(|(key, score)| (key.to_string(), *score))
                .collect(),
            calls: 0,
        }
    }
}

fn key_for(groups: &[String]) -> String {
    groups.join("_")
}

impl CandidateEvaluator for ScriptedEvaluator {
    fn evaluate(&mut self, _run_id: &str, groups: &[String]) -> Result<RunOutcome, SearchError> {
        self.calls += 1;
        match self.scores.get(&key_for(groups)) {
            Some(score) => Ok(RunOutcome::Scored(FitRecord::new(
                *score,
                groups.iter().cloned(),
            ))),
            None => Ok(RunOutcome::NoResult),
        }
    }
}

/// Evaluator whose score drops by a fixed step per extra subtree, so every
/// level looks better than the last.
struct AlwaysImproving;

impl CandidateEvaluator for AlwaysImproving {
    fn evaluate(&mut self, _run_id: &str, groups: &[String]) -> Result<RunOutcome, SearchError> {
        let score = 100_000.0 - 1_000.0 * groups.len() as f64;
        Ok(RunOutcome::Scored(FitRecord::new(
            score,
            groups.iter().cloned(),
        )))
    }
}

#[test]
fn regression_dataset_stops_at_base_partition() {
    // Splitting past two subtrees makes the fit worse; one of the two
    // three-subtree runs fails outright.
    let mut evaluator = ScriptedEvaluator::new(&[
        ("A_B", 81891.4428),
        ("A_BA_BB", 81972.3564),
    ]);
    let search = SubtreeSearch::new(SearchConfig::default()).unwrap();
    let report = search.run(&mut evaluator).unwrap();

    assert_eq!(report.accepted_level, 2);
    assert_eq!(report.stopped, StopReason::NoImprovement);
    let best = report.best.unwrap();
    assert_eq!(best.groups, ["A", "B"]);
    assert_eq!(best.score, 81891.4428);
    // Base run plus both three-subtree candidates, failed one included.
    assert_eq!(report.log.len(), 3);
    assert_eq!(evaluator.calls, 3);
}

#[test]
fn search_advances_while_fit_improves() {
    let mut evaluator = ScriptedEvaluator::new(&[
        ("A_B", 81891.4428),
        ("B_AA_AB", 80000.0),
        ("A_BA_BB", 75000.0),
    ]);
    let search = SubtreeSearch::new(SearchConfig::default()).unwrap();
    let report = search.run(&mut evaluator).unwrap();

    assert_eq!(report.accepted_level, 3);
    assert_eq!(report.stopped, StopReason::NoImprovement);
    let best = report.best.unwrap();
    assert_eq!(best.groups, ["A", "BA", "BB"]);
    assert_eq!(best.score, 75000.0);
    // 1 base run + 2 three-subtree runs + 6 four-subtree runs (3 per
    // qualifying three-subtree entry), none skipped.
    assert_eq!(report.log.len(), 9);
    assert_eq!(evaluator.calls, 9);
    assert!(!improved(&report.log, 4));
}

#[test]
fn failed_base_run_leaves_nothing_to_expand() {
    let mut evaluator = ScriptedEvaluator::new(&[]);
    let search = SubtreeSearch::new(SearchConfig::default()).unwrap();
    let report = search.run(&mut evaluator).unwrap();

    assert_eq!(report.stopped, StopReason::NoCandidates);
    assert_eq!(report.accepted_level, 2);
    assert_eq!(report.best, None);
    assert_eq!(report.log.len(), 1);
}

#[test]
fn level_cap_stops_an_always_improving_search() {
    let config = SearchConfig {
        max_level: 4,
        ..SearchConfig::default()
    };
    let search = SubtreeSearch::new(config).unwrap();
    let report = search.run(&mut AlwaysImproving).unwrap();

    assert_eq!(report.stopped, StopReason::LevelCapReached);
    assert_eq!(report.accepted_level, 4);
    let best = report.best.unwrap();
    assert_eq!(best.level(), 4);
}

#[test]
fn custom_base_partition_drives_run_naming_and_levels() {
    let config = SearchConfig {
        base_groups: vec!["L".to_string(), "R".to_string()],
        ..SearchConfig::default()
    };
    let mut evaluator = ScriptedEvaluator::new(&[
        ("L_R", 5000.0),
        ("R_LA_LB", 4000.0),
    ]);
    let search = SubtreeSearch::new(config).unwrap();
    let report = search.run(&mut evaluator).unwrap();

    assert_eq!(report.accepted_level, 3);
    let best = report.best.unwrap();
    assert_eq!(best.groups, ["R", "LA", "LB"]);
    assert!(report.log.contains("2_L_R"));
    assert!(report.log.contains("3_L_RA_RB"));
}

#[test]
fn identical_runs_produce_identical_reports() {
    let script: &[(&str, f64)] = &[
        ("A_B", 81891.4428),
        ("B_AA_AB", 80000.0),
        ("A_BA_BB", 75000.0),
    ];
    let search = SubtreeSearch::new(SearchConfig::default()).unwrap();

    let first = search.run(&mut ScriptedEvaluator::new(script)).unwrap();
    let second = search.run(&mut ScriptedEvaluator::new(script)).unwrap();
    assert_eq!(first, second);
}
