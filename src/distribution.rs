//! Goal distribution by match phase, plus matches played per team.

use rustc_hash::FxHashMap;

use crate::data::Workbook;
use crate::domain::error::IntegrityError;
use crate::domain::{EventKind, Phase, Roster, TeamId};

/// One row of the goal-distribution table, keyed by team name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDistribution {
    pub team_name: String,
    pub first_half: u32,
    pub second_half: u32,
    pub overtime: u32,
    pub match_count: u32,
}
impl GoalDistribution {
    pub fn total_goals(&self) -> u32 {
        self.first_half + self.second_half + self.overtime
    }
}

#[derive(Debug, Default)]
struct Tally {
    first_half: u32,
    second_half: u32,
    overtime: u32,
}
impl Tally {
    fn credit(&mut self, phase: Phase) {
        match phase {
            Phase::FirstHalf => self.first_half += 1,
            Phase::SecondHalf => self.second_half += 1,
            Phase::Overtime => self.overtime += 1,
        }
    }
}

/// Builds the goal-distribution table: one row per roster team, ordered by
/// ascending TeamId. Teams without a single goal event keep all-zero counts;
/// events crediting a team outside the roster are ignored.
pub fn build(workbook: &Workbook) -> Result<Vec<GoalDistribution>, IntegrityError> {
    let roster = Roster::from_stats(&workbook.match_stats)?;

    let mut tallies: FxHashMap<TeamId, Tally> = roster
        .teams()
        .iter()
        .map(|(team_id, _)| (*team_id, Tally::default()))
        .collect();

    for event in &workbook.match_events {
        // A goal scores for the acting side; an own goal for the receiving one.
        let credited = match &event.event {
            EventKind::Goal | EventKind::GoalOnPenalty => event.team_from_id,
            EventKind::OwnGoal => event.team_to_id,
            EventKind::Other(_) => continue,
        };
        let Some(phase) = Phase::from_ordinal(event.phase) else {
            continue;
        };
        if let Some(tally) = tallies.get_mut(&credited) {
            tally.credit(phase);
        }
    }

    let mut matches_played: FxHashMap<&str, u32> = FxHashMap::default();
    for info in &workbook.match_info {
        *matches_played
            .entry(info.home_team_name.as_str())
            .or_default() += 1;
        *matches_played
            .entry(info.away_team_name.as_str())
            .or_default() += 1;
    }

    let rows = roster
        .teams()
        .iter()
        .map(|(team_id, team_name)| {
            let tally = &tallies[team_id];
            GoalDistribution {
                team_name: team_name.clone(),
                first_half: tally.first_half,
                second_half: tally.second_half,
                overtime: tally.overtime,
                match_count: matches_played
                    .get(team_name.as_str())
                    .copied()
                    .unwrap_or(0),
            }
        })
        .collect();
    Ok(rows)
}
