//! Deterministic ranking and sorting of leaderboard entries
//!
//! This module provides:
//! - The [`RankedEntry`] trait every leaderboard variant implements
//! - Explicit field declarations (`FieldSpec`, `MetricSpec`, `RankProfile`)
//! - Comparable keys for metrics, instants and display names
//! - The canonical rank comparator and the direction-aware sort strategies

pub mod fields;
pub mod keys;
pub mod rank;
pub mod strategy;
pub mod traits;

#[cfg(test)]
mod tests;

pub use fields::*;
pub use keys::*;
pub use rank::*;
pub use strategy::*;
pub use traits::*;
