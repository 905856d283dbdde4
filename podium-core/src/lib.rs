//! # Podium Core
//!
//! The ranking and query engine behind the Podium leaderboards.
//!
//! - [`normalize`]: turn loosely typed JSON records into strict entries
//! - [`query`]: canonical rank comparator, sorting, filtering, pagination and rank maps
//! - [`variants`]: rank profiles and sort-field tables for each leaderboard variant
//! - [`dataset`]: a loaded, immutable leaderboard
//! - [`ingest`]: CSV results to leaderboard JSON generation
//! - [`format`] and [`summary`]: display helpers and aggregate tiles
#![allow(missing_docs)]

pub mod dataset;
pub mod error;
pub mod format;
pub mod ingest;
pub mod normalize;
pub mod query;
pub mod summary;
pub mod variants;

#[cfg(test)]
pub(crate) mod test_support;

pub use dataset::{EntryDetail, Leaderboard};
pub use error::{PodiumError, Result};
pub use normalize::Normalize;
pub use query::prelude::*;
pub use summary::{LeaderboardSummary, MetricAverage, summarize};

pub use podium_model::{
    AlgorithmEntry, AlgorithmSortKey, AttackScores, Better, CapabilityScores,
    ModelEntry, ModelError, ModelSortKey, ScoreGrade, SortDirection, SubScore,
};
