//! Radar normalization: rescales a configurable subset of summary metrics
//! into [0, 1] for relative comparison across teams.

use anyhow::anyhow;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::domain::Metric;
use crate::model::ValidationError;
use crate::summary::TeamSummary;

/// Which metrics feed the radar view and which of them score inversely.
#[derive(Debug, Clone)]
pub struct RadarConfig {
    pub metrics: Vec<Metric>,
    pub lower_is_better: Vec<Metric>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            metrics: vec![
                Metric::Goals,
                Metric::BallPossession,
                Metric::AttemptsBlocked,
                Metric::GoalsConceded,
                Metric::AttemptsOnTargetConceded,
                Metric::AttemptsOnTarget,
            ],
            lower_is_better: vec![Metric::GoalsConceded, Metric::AttemptsOnTargetConceded],
        }
    }
}

impl RadarConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.metrics.is_empty() {
            return Err(anyhow!("at least one radar metric must be configured").into());
        }
        for metric in &self.lower_is_better {
            if !self.metrics.contains(metric) {
                return Err(
                    anyhow!("lower-is-better metric {metric} is not a radar metric").into(),
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("no team carries {0}")]
    MissingMetric(Metric),

    #[error("{metric} has zero range across the table (constant {value})")]
    DegenerateMetric { metric: Metric, value: f64 },
}

/// A summary row with its normalized metric values alongside the originals.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTeamSummary {
    pub summary: TeamSummary,
    pub normalized: FxHashMap<Metric, f64>,
}
impl NormalizedTeamSummary {
    pub fn normalized_value(&self, metric: Metric) -> Option<f64> {
        self.normalized.get(&metric).copied()
    }
}

/// Rescales each configured metric into [0, 1] using its min/max across all
/// rows; lower-is-better metrics invert the scale. Original rows and values
/// are preserved untouched, in their original order. A metric that is
/// constant across the table has no defined rescaling and is rejected rather
/// than passed through as NaN.
pub fn normalise(
    rows: &[TeamSummary],
    config: &RadarConfig,
) -> Result<Vec<NormalizedTeamSummary>, RadarError> {
    let mut normalized: Vec<FxHashMap<Metric, f64>> = vec![FxHashMap::default(); rows.len()];
    for &metric in &config.metrics {
        let (min, max) = range(rows, metric)?;
        if max == min {
            return Err(RadarError::DegenerateMetric { metric, value: min });
        }
        let invert = config.lower_is_better.contains(&metric);
        for (index, row) in rows.iter().enumerate() {
            if let Some(value) = row.value(metric) {
                let scaled = (value - min) / (max - min);
                normalized[index].insert(metric, if invert { 1.0 - scaled } else { scaled });
            }
        }
    }

    Ok(rows
        .iter()
        .zip(normalized)
        .map(|(row, normalized)| NormalizedTeamSummary {
            summary: row.clone(),
            normalized,
        })
        .collect())
}

fn range(rows: &[TeamSummary], metric: Metric) -> Result<(f64, f64), RadarError> {
    let mut bounds: Option<(f64, f64)> = None;
    for row in rows {
        if let Some(value) = row.value(metric) {
            bounds = Some(match bounds {
                None => (value, value),
                Some((min, max)) => (f64::min(min, value), f64::max(max, value)),
            });
        }
    }
    bounds.ok_or(RadarError::MissingMetric(metric))
}
