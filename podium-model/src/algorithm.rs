//! Steganography algorithm leaderboard entries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::ModelError;
use crate::grade::{SubScore, present_scores};

/// Robustness scores per attack category (0-100). `None` means the category
/// was not evaluated, which is distinct from a measured zero.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AttackScores {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub compression_score: Option<f64>,
    /// Also reported as the "filtering" category.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub blur_score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub noise_score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub geometric_score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub capacity_score: Option<f64>,
}

impl AttackScores {
    /// Measured scores in display order.
    pub fn present(&self) -> Vec<SubScore> {
        present_scores([
            ("compressionScore", "Compression", self.compression_score),
            ("blurScore", "Blur / Filtering", self.blur_score),
            ("noiseScore", "Noise", self.noise_score),
            ("geometricScore", "Geometric", self.geometric_score),
            ("capacityScore", "Capacity", self.capacity_score),
        ])
    }
}

/// One evaluated steganography algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AlgorithmEntry {
    pub id: String,
    pub algorithm_name: String,
    pub dataset_profile: String,
    pub composite_score: f64,
    pub psnr_db: f64,
    pub ber: f64,
    pub payload_bpp: f64,
    pub runtime_ms: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::timestamp"))]
    pub last_evaluated_iso: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub algorithm_family: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Structural similarity index, 0-1.
    pub ssim: f64,
    /// Payload recovery, 0-100.
    pub recovery_rate: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attack_scores: AttackScores,
}

/// Sortable columns of the algorithm leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AlgorithmSortKey {
    Rank,
    #[default]
    CompositeScore,
    PsnrDb,
    Ssim,
    Ber,
    PayloadBpp,
    RecoveryRate,
    RuntimeMs,
    LastEvaluated,
}

impl AlgorithmSortKey {
    pub fn all() -> &'static [AlgorithmSortKey] {
        use AlgorithmSortKey::*;
        &[
            Rank,
            CompositeScore,
            PsnrDb,
            Ssim,
            Ber,
            PayloadBpp,
            RecoveryRate,
            RuntimeMs,
            LastEvaluated,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmSortKey::Rank => "rank",
            AlgorithmSortKey::CompositeScore => "compositeScore",
            AlgorithmSortKey::PsnrDb => "psnrDb",
            AlgorithmSortKey::Ssim => "ssim",
            AlgorithmSortKey::Ber => "ber",
            AlgorithmSortKey::PayloadBpp => "payloadBpp",
            AlgorithmSortKey::RecoveryRate => "recoveryRate",
            AlgorithmSortKey::RuntimeMs => "runtimeMs",
            AlgorithmSortKey::LastEvaluated => "lastEvaluated",
        }
    }
}

impl fmt::Display for AlgorithmSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmSortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownSortKey(wanted.to_string()))
    }
}
