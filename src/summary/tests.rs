use assert_float_eq::*;

use super::*;
use crate::testing::{sample_workbook, stat, workbook_with_stats};

#[test]
fn averages_each_tracked_statistic() {
    let rows = summarise(&sample_workbook()).unwrap();
    assert_eq!(3, rows.len());

    let italy = &rows[0];
    assert_eq!(TeamId(1), italy.team_id);
    assert_eq!("Italy", italy.team_name);
    assert_float_relative_eq!(1.5, italy.value(Metric::Goals).unwrap());
    assert_float_relative_eq!(4.0, italy.value(Metric::AttemptsOnTarget).unwrap());
    assert_float_relative_eq!(57.5, italy.value(Metric::BallPossession).unwrap());

    let england = &rows[1];
    assert_eq!(TeamId(2), england.team_id);
    assert_float_relative_eq!(1.0, england.value(Metric::Goals).unwrap());
    assert_float_relative_eq!(40.0, england.value(Metric::BallPossession).unwrap());
}

#[test]
fn rows_ordered_by_team_id() {
    let rows = summarise(&sample_workbook()).unwrap();
    let ids: Vec<TeamId> = rows.iter().map(|row| row.team_id).collect();
    assert_eq!(vec![TeamId(1), TeamId(2), TeamId(3)], ids);
}

#[test]
fn attributes_attempts_on_target_to_the_opponent() {
    let workbook = workbook_with_stats(vec![
        stat(1, 1, "A", "Attempts on target", 4.0),
        stat(1, 2, "B", "Attempts on target", 2.0),
    ]);
    let rows = summarise(&workbook).unwrap();
    assert_float_relative_eq!(
        2.0,
        rows[0].value(Metric::AttemptsOnTargetConceded).unwrap()
    );
    assert_float_relative_eq!(
        4.0,
        rows[1].value(Metric::AttemptsOnTargetConceded).unwrap()
    );
}

#[test]
fn conceded_averages_across_matches() {
    let rows = summarise(&sample_workbook()).unwrap();
    // Italy faced England's 3 in match 1 and Wales's 2 in match 2.
    assert_float_relative_eq!(
        2.5,
        rows[0].value(Metric::AttemptsOnTargetConceded).unwrap()
    );
    assert_float_relative_eq!(
        5.0,
        rows[1].value(Metric::AttemptsOnTargetConceded).unwrap()
    );
    assert_float_relative_eq!(
        3.0,
        rows[2].value(Metric::AttemptsOnTargetConceded).unwrap()
    );
}

#[test]
fn untracked_labels_ignored() {
    let workbook = workbook_with_stats(vec![
        stat(1, 1, "A", "Goals", 2.0),
        stat(1, 1, "A", "Corners", 7.0),
        stat(1, 2, "B", "Goals", 1.0),
    ]);
    let rows = summarise(&workbook).unwrap();
    assert_eq!(1, rows[0].values.len());
    assert_float_relative_eq!(2.0, rows[0].value(Metric::Goals).unwrap());
}

#[test]
fn conceded_absent_without_on_target_records() {
    let workbook = workbook_with_stats(vec![
        stat(1, 1, "A", "Goals", 2.0),
        stat(1, 2, "B", "Goals", 1.0),
    ]);
    let rows = summarise(&workbook).unwrap();
    assert_eq!(None, rows[0].value(Metric::AttemptsOnTargetConceded));
    assert_eq!(None, rows[1].value(Metric::AttemptsOnTargetConceded));
}

#[test]
fn lone_side_cannot_resolve_an_opponent() {
    let workbook = workbook_with_stats(vec![stat(1, 1, "A", "Attempts on target", 4.0)]);
    let err = summarise(&workbook).unwrap_err();
    assert_eq!(
        "match 1 has 0 opposing candidates for team 1",
        err.to_string()
    );
}

#[test]
fn ambiguous_sides_cannot_resolve_an_opponent() {
    let workbook = workbook_with_stats(vec![
        stat(1, 1, "A", "Attempts on target", 4.0),
        stat(1, 2, "B", "Goals", 1.0),
        stat(1, 3, "C", "Goals", 2.0),
    ]);
    let err = summarise(&workbook).unwrap_err();
    assert_eq!(
        "match 1 has 2 opposing candidates for team 1",
        err.to_string()
    );
}

#[test]
fn roster_conflicts_propagate() {
    let workbook = workbook_with_stats(vec![
        stat(1, 1, "Italy", "Goals", 2.0),
        stat(2, 1, "Italia", "Goals", 1.0),
    ]);
    let err = summarise(&workbook).unwrap_err();
    assert!(matches!(err, IntegrityError::Roster(_)));
}

#[test]
fn resolve_opponent_picks_the_unique_other_side() {
    let sides = sides_by_match(&[
        stat(1, 1, "A", "Goals", 2.0),
        stat(1, 1, "A", "Tackles", 9.0),
        stat(1, 2, "B", "Goals", 1.0),
    ]);
    assert_eq!(
        TeamId(2),
        resolve_opponent(1, TeamId(1), &sides).unwrap()
    );
    assert_eq!(
        TeamId(1),
        resolve_opponent(1, TeamId(2), &sides).unwrap()
    );
}
