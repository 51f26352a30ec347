//! Per-team aggregate statistics from a football-tournament match dataset.
//! Pivots long-format per-match statistic rows into a per-team summary table,
//! derives the cross-referenced attempts-on-target-conceded metric, tallies
//! goals by match phase, and rescales selected metrics for radar-style
//! comparison.

pub mod data;
pub mod distribution;
pub mod domain;
pub mod model;
pub mod print;
pub mod radar;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
