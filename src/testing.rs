//! Testing helpers.

use std::env;
use std::fs;
use std::path::PathBuf;

use assert_float_eq::*;

use crate::data::{MatchEventRecord, MatchInfoRecord, MatchStatRecord, Workbook};
use crate::domain::TeamId;

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

pub fn stat(
    match_id: u64,
    team_id: u32,
    team_name: &str,
    stats_name: &str,
    value: f64,
) -> MatchStatRecord {
    MatchStatRecord {
        match_id,
        team_id: TeamId(team_id),
        team_name: team_name.into(),
        stats_name: stats_name.into(),
        value,
    }
}

pub fn event(
    match_id: u64,
    team_from_id: u32,
    team_to_id: u32,
    label: &str,
    phase: u8,
) -> MatchEventRecord {
    MatchEventRecord {
        match_id,
        team_from_id: TeamId(team_from_id),
        team_to_id: TeamId(team_to_id),
        event: label.to_string().into(),
        phase,
    }
}

pub fn info(home_team_name: &str, away_team_name: &str) -> MatchInfoRecord {
    MatchInfoRecord {
        home_team_name: home_team_name.into(),
        away_team_name: away_team_name.into(),
    }
}

pub fn workbook_with_stats(match_stats: Vec<MatchStatRecord>) -> Workbook {
    Workbook {
        match_stats,
        match_events: vec![],
        match_info: vec![],
    }
}

/// A two-match, three-team tournament slice used across the module tests.
///
/// Match 1: Italy 2–1 England (Italy goals in either half, England's in the
/// second). Match 2: Wales 1–1 Italy (a Welsh own goal gifts Italy's, Wales
/// converts a penalty in overtime).
pub fn sample_workbook() -> Workbook {
    let mut match_stats = vec![];
    for (match_id, team_id, team_name, goals, on_target, possession) in [
        (1, 1, "Italy", 2.0, 5.0, 60.0),
        (1, 2, "England", 1.0, 3.0, 40.0),
        (2, 1, "Italy", 1.0, 3.0, 55.0),
        (2, 3, "Wales", 1.0, 2.0, 45.0),
    ] {
        match_stats.push(stat(match_id, team_id, team_name, "Goals", goals));
        match_stats.push(stat(
            match_id,
            team_id,
            team_name,
            "Attempts on target",
            on_target,
        ));
        match_stats.push(stat(
            match_id,
            team_id,
            team_name,
            "Ball Possession",
            possession,
        ));
    }

    Workbook {
        match_stats,
        match_events: vec![
            event(1, 1, 2, "Goal", 1),
            event(1, 1, 2, "Goal", 2),
            event(1, 2, 1, "Goal", 2),
            event(1, 2, 1, "YellowCard", 1),
            event(2, 3, 1, "OwnGoal", 2),
            event(2, 3, 1, "GoalOnPenalty", 3),
        ],
        match_info: vec![info("Italy", "England"), info("Wales", "Italy")],
    }
}

/// Writes `contents` under a unique name in the system temp directory.
pub fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("gaffer-test-{name}"));
    fs::write(&path, contents).expect("cannot write test file");
    path
}
