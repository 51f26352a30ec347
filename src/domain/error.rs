use thiserror::Error;

use crate::domain::TeamId;

/// Violations of dataset referential integrity. Surfaced immediately; no
/// partial tables are produced.
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("{0}")]
    Roster(#[from] RosterConflict),

    #[error("{0}")]
    Opponent(#[from] UnresolvedOpponent),
}

/// The TeamID↔TeamName mapping failed the one-to-one invariant.
#[derive(Debug, Error)]
pub enum RosterConflict {
    #[error("team {id} appears as both \"{existing}\" and \"{conflicting}\"")]
    IdRenamed {
        id: TeamId,
        existing: String,
        conflicting: String,
    },

    #[error("\"{name}\" is shared by teams {existing} and {conflicting}")]
    NameShared {
        name: String,
        existing: TeamId,
        conflicting: TeamId,
    },
}

/// A match record's opposing side could not be uniquely resolved: zero or
/// more than one other team shares its MatchID.
#[derive(Debug, Error)]
#[error("match {match_id} has {candidates} opposing candidates for team {team_id}")]
pub struct UnresolvedOpponent {
    pub match_id: u64,
    pub team_id: TeamId,
    pub candidates: usize,
}
