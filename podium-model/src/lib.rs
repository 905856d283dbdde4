//! Core data model definitions shared across Podium crates.
//!
//! Two leaderboard variants live side by side: steganography algorithms
//! ([`AlgorithmEntry`]) and language models ([`ModelEntry`]). Both expose the
//! same shape to the ranking engine in `podium-core`.
#![allow(missing_docs)]

pub mod algorithm;
pub mod error;
pub mod grade;
pub mod llm;
pub mod sort;
#[cfg(feature = "serde")]
pub mod timestamp;

pub use algorithm::{AlgorithmEntry, AlgorithmSortKey, AttackScores};
pub use error::{ModelError, Result as ModelResult};
pub use grade::{ScoreGrade, SubScore};
pub use llm::{CapabilityScores, ModelEntry, ModelSortKey};
pub use sort::{Better, SortDirection};
