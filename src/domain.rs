//! Core vocabulary: team identity, match phases, event kinds and the tracked
//! metrics of the summary table.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::data::MatchStatRecord;
use crate::domain::error::RosterConflict;

pub mod error;

/// Unique team identifier, stable for the dataset lifetime.
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The segment of a match in which an event occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    FirstHalf,
    SecondHalf,
    Overtime,
}
impl Phase {
    /// Classifies a raw phase ordinal: 1 is the first half, 2 the second,
    /// anything from 3 up counts as overtime or penalties. Ordinal 0 belongs
    /// to no bucket.
    pub fn from_ordinal(ordinal: u8) -> Option<Phase> {
        match ordinal {
            0 => None,
            1 => Some(Phase::FirstHalf),
            2 => Some(Phase::SecondHalf),
            _ => Some(Phase::Overtime),
        }
    }
}

/// An entry of the `"Match events"` log. Only the goal kinds participate in
/// the distribution; every other label deserializes into `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Goal,
    GoalOnPenalty,
    OwnGoal,
    Other(String),
}

impl From<String> for EventKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Goal" => EventKind::Goal,
            "GoalOnPenalty" => EventKind::GoalOnPenalty,
            "OwnGoal" => EventKind::OwnGoal,
            _ => EventKind::Other(label),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Goal => "Goal".into(),
            EventKind::GoalOnPenalty => "GoalOnPenalty".into(),
            EventKind::OwnGoal => "OwnGoal".into(),
            EventKind::Other(label) => label,
        }
    }
}

/// A column of the team summary table. Display strings are the exact
/// `StatsName` labels carried by the workbook.
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter, EnumString,
)]
pub enum Metric {
    #[strum(serialize = "Goals")]
    Goals,
    #[strum(serialize = "Attempts on target")]
    AttemptsOnTarget,
    #[strum(serialize = "Total Attempts")]
    TotalAttempts,
    #[strum(serialize = "Attempts blocked")]
    AttemptsBlocked,
    #[strum(serialize = "Passes completed")]
    PassesCompleted,
    #[strum(serialize = "Goals conceded")]
    GoalsConceded,
    #[strum(serialize = "Fouls committed")]
    FoulsCommitted,
    #[strum(serialize = "Tackles")]
    Tackles,
    #[strum(serialize = "Saves")]
    Saves,
    #[strum(serialize = "Ball Possession")]
    BallPossession,
    #[strum(serialize = "Passes accuracy")]
    PassesAccuracy,
    #[strum(serialize = "Attempts on target conceded")]
    AttemptsOnTargetConceded,
}
impl Metric {
    /// The statistics averaged straight off the `"Match Stats"` sheet;
    /// excludes the derived conceded column.
    pub const AVERAGED: [Metric; 11] = [
        Metric::Goals,
        Metric::AttemptsOnTarget,
        Metric::TotalAttempts,
        Metric::AttemptsBlocked,
        Metric::PassesCompleted,
        Metric::GoalsConceded,
        Metric::FoulsCommitted,
        Metric::Tackles,
        Metric::Saves,
        Metric::BallPossession,
        Metric::PassesAccuracy,
    ];

    /// Maps a raw `StatsName` label onto a tracked metric. Labels outside the
    /// averaged set, including the derived conceded label, yield `None`.
    pub fn tracked(stats_name: &str) -> Option<Metric> {
        let metric = stats_name.parse::<Metric>().ok()?;
        Metric::AVERAGED.contains(&metric).then_some(metric)
    }
}

/// The TeamID↔TeamName directory extracted from the `"Match Stats"` sheet,
/// ordered by ascending TeamId. The mapping must be one-to-one for the
/// dataset lifetime; violations surface as [`RosterConflict`].
#[derive(Debug, Clone)]
pub struct Roster {
    teams: Vec<(TeamId, String)>,
    index: FxHashMap<TeamId, usize>,
}
impl Roster {
    pub fn from_stats(records: &[MatchStatRecord]) -> Result<Roster, RosterConflict> {
        let mut names_by_id: FxHashMap<TeamId, String> = FxHashMap::default();
        let mut ids_by_name: FxHashMap<String, TeamId> = FxHashMap::default();
        for record in records {
            match names_by_id.get(&record.team_id) {
                Some(existing) if existing != &record.team_name => {
                    return Err(RosterConflict::IdRenamed {
                        id: record.team_id,
                        existing: existing.clone(),
                        conflicting: record.team_name.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    if let Some(&holder) = ids_by_name.get(&record.team_name) {
                        return Err(RosterConflict::NameShared {
                            name: record.team_name.clone(),
                            existing: holder,
                            conflicting: record.team_id,
                        });
                    }
                    names_by_id.insert(record.team_id, record.team_name.clone());
                    ids_by_name.insert(record.team_name.clone(), record.team_id);
                }
            }
        }

        let mut teams: Vec<_> = names_by_id.into_iter().collect();
        teams.sort_unstable_by_key(|(id, _)| *id);
        let index = teams
            .iter()
            .enumerate()
            .map(|(position, (id, _))| (*id, position))
            .collect();
        Ok(Roster { teams, index })
    }

    pub fn teams(&self) -> &[(TeamId, String)] {
        &self.teams
    }

    pub fn contains(&self, id: TeamId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn name_of(&self, id: TeamId) -> Option<&str> {
        self.index
            .get(&id)
            .map(|&position| self.teams[position].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
