//! Workbook loading: the raw sheet records and their typed read path.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{EventKind, TeamId};

/// One statistic for one team in one match, in the long format of the
/// `"Match Stats"` sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStatRecord {
    #[serde(rename = "MatchID")]
    pub match_id: u64,
    #[serde(rename = "TeamID")]
    pub team_id: TeamId,
    #[serde(rename = "TeamName")]
    pub team_name: String,
    #[serde(rename = "StatsName")]
    pub stats_name: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

/// One in-match event with the phase it occurred in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEventRecord {
    #[serde(rename = "MatchID")]
    pub match_id: u64,
    #[serde(rename = "TeamFromID")]
    pub team_from_id: TeamId,
    #[serde(rename = "TeamToID")]
    pub team_to_id: TeamId,
    #[serde(rename = "Event")]
    pub event: EventKind,
    #[serde(rename = "Phase")]
    pub phase: u8,
}

/// One row per match; used only to count matches played per team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInfoRecord {
    #[serde(rename = "HomeTeamName")]
    pub home_team_name: String,
    #[serde(rename = "AwayTeamName")]
    pub away_team_name: String,
}

/// The source workbook: named sheets of row records. Sheets beyond the three
/// named ones are ignored; a missing sheet or column fails the read.
#[derive(Debug, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(rename = "Match Stats")]
    pub match_stats: Vec<MatchStatRecord>,
    #[serde(rename = "Match events")]
    pub match_events: Vec<MatchEventRecord>,
    #[serde(rename = "Match information")]
    pub match_info: Vec<MatchInfoRecord>,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open source file {path}: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("workbook schema violation: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Reads a JSON-encoded workbook from the given `path`.
pub fn read_from_file(path: impl AsRef<Path>) -> Result<Workbook, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::SourceNotFound {
        path: path.into(),
        source,
    })?;
    let workbook = serde_json::from_reader(BufReader::new(file))?;
    Ok(workbook)
}
