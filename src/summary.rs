//! The aggregation pipeline: pivots long-format match statistics into one
//! summary row per team and derives the attempts-on-target-conceded metric.

use rustc_hash::FxHashMap;

use crate::data::{MatchStatRecord, Workbook};
use crate::domain::error::{IntegrityError, UnresolvedOpponent};
use crate::domain::{Metric, Roster, TeamId};

/// One row of the team summary table: the mean of every tracked statistic
/// across the team's matches. An absent entry is the null cell of a sparse
/// pivot, a team that never recorded the statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    pub team_id: TeamId,
    pub team_name: String,
    pub values: FxHashMap<Metric, f64>,
}
impl TeamSummary {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }
}

#[derive(Debug, Default)]
struct Mean {
    sum: f64,
    count: u32,
}
impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Builds the summary table from the `"Match Stats"` sheet: one row per team,
/// ordered by ascending TeamId. Teams without a single stat record do not
/// appear.
pub fn summarise(workbook: &Workbook) -> Result<Vec<TeamSummary>, IntegrityError> {
    let roster = Roster::from_stats(&workbook.match_stats)?;

    let mut means: FxHashMap<(TeamId, Metric), Mean> = FxHashMap::default();
    for record in &workbook.match_stats {
        if let Some(metric) = Metric::tracked(&record.stats_name) {
            means
                .entry((record.team_id, metric))
                .or_default()
                .push(record.value);
        }
    }

    // Every on-target attempt is a conceded observation against the opposing
    // side of the same match.
    let sides = sides_by_match(&workbook.match_stats);
    let mut conceded: FxHashMap<TeamId, Mean> = FxHashMap::default();
    for record in &workbook.match_stats {
        if Metric::tracked(&record.stats_name) != Some(Metric::AttemptsOnTarget) {
            continue;
        }
        let opponent = resolve_opponent(record.match_id, record.team_id, &sides)?;
        conceded.entry(opponent).or_default().push(record.value);
    }

    let mut rows = Vec::with_capacity(roster.len());
    for (team_id, team_name) in roster.teams() {
        let mut values = FxHashMap::default();
        for metric in Metric::AVERAGED {
            if let Some(mean) = means.get(&(*team_id, metric)) {
                values.insert(metric, mean.value());
            }
        }
        if let Some(mean) = conceded.get(team_id) {
            values.insert(Metric::AttemptsOnTargetConceded, mean.value());
        }
        rows.push(TeamSummary {
            team_id: *team_id,
            team_name: team_name.clone(),
            values,
        });
    }
    Ok(rows)
}

/// The distinct teams that recorded statistics in each match, in order of
/// first appearance.
fn sides_by_match(records: &[MatchStatRecord]) -> FxHashMap<u64, Vec<TeamId>> {
    let mut sides: FxHashMap<u64, Vec<TeamId>> = FxHashMap::default();
    for record in records {
        let teams = sides.entry(record.match_id).or_default();
        if !teams.contains(&record.team_id) {
            teams.push(record.team_id);
        }
    }
    sides
}

/// Resolves the other side of `team_id`'s match: the unique TeamId sharing
/// `match_id`. Zero or several candidates is a data integrity failure, never
/// an arbitrary pick.
pub fn resolve_opponent(
    match_id: u64,
    team_id: TeamId,
    sides: &FxHashMap<u64, Vec<TeamId>>,
) -> Result<TeamId, UnresolvedOpponent> {
    let candidates: Vec<TeamId> = sides
        .get(&match_id)
        .map(|teams| {
            teams
                .iter()
                .copied()
                .filter(|&other| other != team_id)
                .collect()
        })
        .unwrap_or_default();
    match candidates.as_slice() {
        &[opponent] => Ok(opponent),
        _ => Err(UnresolvedOpponent {
            match_id,
            team_id,
            candidates: candidates.len(),
        }),
    }
}

#[cfg(test)]
mod tests;
