//! Language model leaderboard entries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::ModelError;
use crate::grade::{SubScore, present_scores};

/// Per-capability benchmark scores (0-100). `None` means not evaluated.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CapabilityScores {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub reasoning_score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub coding_score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub math_score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub knowledge_score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub safety_score: Option<f64>,
}

impl CapabilityScores {
    pub fn present(&self) -> Vec<SubScore> {
        present_scores([
            ("reasoningScore", "Reasoning", self.reasoning_score),
            ("codingScore", "Coding", self.coding_score),
            ("mathScore", "Math", self.math_score),
            ("knowledgeScore", "Knowledge", self.knowledge_score),
            ("safetyScore", "Safety", self.safety_score),
        ])
    }
}

/// One evaluated language model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ModelEntry {
    pub id: String,
    pub model_name: String,
    pub provider: String,
    pub composite_score: f64,
    pub quality_score: f64,
    pub latency_ms: f64,
    /// USD per thousand tokens.
    pub cost_per_1k_tokens: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::timestamp"))]
    pub last_evaluated_iso: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub model_family: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub capability_scores: CapabilityScores,
}

/// Sortable columns of the model leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ModelSortKey {
    Rank,
    #[default]
    CompositeScore,
    QualityScore,
    LatencyMs,
    #[cfg_attr(feature = "serde", serde(rename = "costPer1kTokens"))]
    CostPer1kTokens,
    LastEvaluated,
}

impl ModelSortKey {
    pub fn all() -> &'static [ModelSortKey] {
        use ModelSortKey::*;
        &[
            Rank,
            CompositeScore,
            QualityScore,
            LatencyMs,
            CostPer1kTokens,
            LastEvaluated,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSortKey::Rank => "rank",
            ModelSortKey::CompositeScore => "compositeScore",
            ModelSortKey::QualityScore => "qualityScore",
            ModelSortKey::LatencyMs => "latencyMs",
            ModelSortKey::CostPer1kTokens => "costPer1kTokens",
            ModelSortKey::LastEvaluated => "lastEvaluated",
        }
    }
}

impl fmt::Display for ModelSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSortKey {
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
