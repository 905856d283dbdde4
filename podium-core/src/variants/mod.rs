//! Leaderboard variants
//!
//! Each variant wires one entry type into the generic engine: how raw
//! records normalize, which metrics decide the canonical rank and how every
//! sortable column is read.

pub mod algorithm;
pub mod model;

pub use algorithm::ALGORITHM_ID_PREFIX;
pub use model::MODEL_ID_PREFIX;
