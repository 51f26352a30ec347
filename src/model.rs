//! The load-once access layer: derives both tables from a single workbook
//! read and hands independent copies to presentation callers.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::debug;

use crate::data;
use crate::data::DataError;
use crate::distribution;
use crate::distribution::GoalDistribution;
use crate::domain::error::IntegrityError;
use crate::radar;
use crate::radar::{NormalizedTeamSummary, RadarConfig, RadarError};
use crate::summary;
use crate::summary::TeamSummary;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(#[from] pub Box<dyn Error>);

impl From<anyhow::Error> for ValidationError {
    fn from(value: anyhow::Error) -> Self {
        ValidationError(value.into())
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Data(#[from] DataError),

    #[error("{0}")]
    Integrity(#[from] IntegrityError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub radar: RadarConfig,
}
impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.radar.validate()
    }
}

/// Holds the derived tables for the process lifetime. Loading is the only
/// expensive step and runs once; accessors clone, so no caller can reach the
/// cached originals.
#[derive(Debug)]
pub struct Model {
    config: Config,
    summaries: Vec<TeamSummary>,
    goal_distribution: Vec<GoalDistribution>,
}

impl Model {
    /// Reads the workbook once and derives both tables.
    pub fn load(config: Config) -> Result<Model, LoadError> {
        config.validate()?;
        let start = Instant::now();
        let workbook = data::read_from_file(&config.source)?;
        debug!(
            "sourced {} stat, {} event and {} match rows from {}",
            workbook.match_stats.len(),
            workbook.match_events.len(),
            workbook.match_info.len(),
            config.source.display()
        );
        let summaries = summary::summarise(&workbook)?;
        let goal_distribution = distribution::build(&workbook)?;
        let elapsed = start.elapsed();
        debug!("aggregation took {elapsed:?} for {} teams", summaries.len());
        Ok(Model {
            config,
            summaries,
            goal_distribution,
        })
    }

    /// Lazily initializes the process-wide instance. The load runs at most
    /// once no matter how many callers race; the first successful load wins
    /// and later configs are ignored.
    pub fn shared(config: Config) -> Result<&'static Model, LoadError> {
        static SHARED: OnceCell<Model> = OnceCell::new();
        SHARED.get_or_try_init(|| Model::load(config))
    }

    /// The per-team summary table; an independent copy per call.
    pub fn team_summaries(&self) -> Vec<TeamSummary> {
        self.summaries.clone()
    }

    /// The goal-distribution table; an independent copy per call.
    pub fn goal_distribution(&self) -> Vec<GoalDistribution> {
        self.goal_distribution.clone()
    }

    /// Normalizes the supplied summary rows against the configured radar
    /// metrics. Recomputed per call.
    pub fn radar(
        &self,
        rows: &[TeamSummary],
    ) -> Result<Vec<NormalizedTeamSummary>, RadarError> {
        radar::normalise(rows, &self.config.radar)
    }

    pub fn radar_config(&self) -> &RadarConfig {
        &self.config.radar
    }
}
