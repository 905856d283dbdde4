//! Language model leaderboard

use chrono::{DateTime, Utc};
use podium_model::{Better, CapabilityScores, ModelEntry, ModelSortKey, SubScore};
use serde_json::Value;

use crate::normalize::{Normalize, RawRecord};
use crate::query::sorting::{
    FieldKind, FieldSpec, MetricSpec, RankProfile, RankedEntry, SortField,
};

pub const MODEL_ID_PREFIX: &str = "model";
pub const UNKNOWN_MODEL: &str = "Unknown model";
pub const UNKNOWN_PROVIDER: &str = "Unknown provider";

impl Normalize for ModelEntry {
    fn normalize(raw: &Value, index: usize) -> Self {
        let record = RawRecord::new(raw);

        ModelEntry {
            id: record.id("id", <Self as RankedEntry>::ID_PREFIX, index),
            model_name: record.text("modelName", UNKNOWN_MODEL),
            provider: record.text("provider", UNKNOWN_PROVIDER),
            composite_score: record.number("compositeScore"),
            quality_score: record.number("qualityScore"),
            latency_ms: record.number("latencyMs"),
            cost_per_1k_tokens: record.number("costPer1kTokens"),
            last_evaluated_iso: record.timestamp("lastEvaluatedIso"),
            model_family: record.optional_text("modelFamily"),
            description: record.optional_text("description"),
            capability_scores: CapabilityScores {
                reasoning_score: record.optional_number("reasoningScore"),
                coding_score: record.optional_number("codingScore"),
                math_score: record.optional_number("mathScore"),
                knowledge_score: record.optional_number("knowledgeScore"),
                safety_score: record.optional_number("safetyScore"),
            },
        }
    }
}

fn composite(entry: &ModelEntry) -> f64 {
    entry.composite_score
}

fn quality(entry: &ModelEntry) -> f64 {
    entry.quality_score
}

fn latency(entry: &ModelEntry) -> f64 {
    entry.latency_ms
}

fn cost(entry: &ModelEntry) -> f64 {
    entry.cost_per_1k_tokens
}

fn evaluated(entry: &ModelEntry) -> DateTime<Utc> {
    entry.last_evaluated_iso
}

const COMPOSITE: MetricSpec<ModelEntry> = MetricSpec {
    id: "compositeScore",
    label: "Composite score",
    better: Better::Higher,
    value: composite,
};

const QUALITY: MetricSpec<ModelEntry> = MetricSpec {
    id: "qualityScore",
    label: "Quality",
    better: Better::Higher,
    value: quality,
};

const LATENCY: MetricSpec<ModelEntry> = MetricSpec {
    id: "latencyMs",
    label: "Latency",
    better: Better::Lower,
    value: latency,
};

const COST: MetricSpec<ModelEntry> = MetricSpec {
    id: "costPer1kTokens",
    label: "Cost per 1k tokens",
    better: Better::Lower,
    value: cost,
};

static RANK_PROFILE: RankProfile<ModelEntry> = RankProfile {
    primary: COMPOSITE,
    tie_breakers: &[QUALITY, LATENCY, COST],
};

static SUMMARY_METRICS: [MetricSpec<ModelEntry>; 4] =
    [COMPOSITE, QUALITY, LATENCY, COST];

static RANK_FIELD: FieldSpec<ModelEntry> = FieldSpec {
    id: "rank",
    better: Better::Lower,
    kind: FieldKind::Rank,
};
static COMPOSITE_FIELD: FieldSpec<ModelEntry> = FieldSpec {
    id: "compositeScore",
    better: Better::Higher,
    kind: FieldKind::Metric(composite),
};
static QUALITY_FIELD: FieldSpec<ModelEntry> = FieldSpec {
    id: "qualityScore",
    better: Better::Higher,
    kind: FieldKind::Metric(quality),
};
static LATENCY_FIELD: FieldSpec<ModelEntry> = FieldSpec {
    id: "latencyMs",
    better: Better::Lower,
    kind: FieldKind::Metric(latency),
};
static COST_FIELD: FieldSpec<ModelEntry> = FieldSpec {
    id: "costPer1kTokens",
    better: Better::Lower,
    kind: FieldKind::Metric(cost),
};
static EVALUATED_FIELD: FieldSpec<ModelEntry> = FieldSpec {
    id: "lastEvaluated",
    better: Better::Higher,
    kind: FieldKind::Timestamp(evaluated),
};

impl SortField for ModelSortKey {
    type Entry = ModelEntry;

    const RANK: Self = ModelSortKey::Rank;

    fn spec(self) -> &'static FieldSpec<ModelEntry> {
        match self {
            ModelSortKey::Rank => &RANK_FIELD,
            ModelSortKey::CompositeScore => &COMPOSITE_FIELD,
            ModelSortKey::QualityScore => &QUALITY_FIELD,
            ModelSortKey::LatencyMs => &LATENCY_FIELD,
            ModelSortKey::CostPer1kTokens => &COST_FIELD,
            ModelSortKey::LastEvaluated => &EVALUATED_FIELD,
        }
    }
}

impl RankedEntry for ModelEntry {
    type SortKey = ModelSortKey;

    const ID_PREFIX: &'static str = MODEL_ID_PREFIX;

    fn rank_profile() -> &'static RankProfile<Self> {
        &RANK_PROFILE
    }

    fn summary_metrics() -> &'static [MetricSpec<Self>] {
        &SUMMARY_METRICS
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.model_name
    }

    fn group(&self) -> &str {
        &self.provider
    }

    fn family(&self) -> Option<&str> {
        self.model_family.as_deref()
    }

    fn last_evaluated(&self) -> DateTime<Utc> {
        self.last_evaluated_iso
    }

    fn sub_scores(&self) -> Vec<SubScore> {
        self.capability_scores.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sorting::{compare_rank, sort_entries};
    use podium_model::SortDirection;
    use serde_json::json;
    use std::cmp::Ordering;

    fn model(id: &str, name: &str, composite: f64, latency: f64, cost: f64) -> ModelEntry {
        ModelEntry::normalize(
            &json!({
                "id": id,
                "modelName": name,
                "provider": "Acme",
                "compositeScore": composite,
                "qualityScore": 88.0,
                "latencyMs": latency,
                "costPer1kTokens": cost,
            }),
            0,
        )
    }

    #[test]
    fn missing_fields_take_documented_defaults() {
        let entry = ModelEntry::normalize(&json!(null), 0);
        assert_eq!(entry.id, "model-1");
        assert_eq!(entry.model_name, UNKNOWN_MODEL);
        assert_eq!(entry.provider, UNKNOWN_PROVIDER);
        assert_eq!(entry.cost_per_1k_tokens, 0.0);
        assert_eq!(entry.capability_scores, CapabilityScores::default());
    }

    #[test]
    fn latency_then_cost_break_ties() {
        let fast = model("m1", "Fast", 90.0, 200.0, 0.02);
        let slow = model("m2", "Slow", 90.0, 400.0, 0.01);
        let cheap = model("m3", "Cheap", 90.0, 200.0, 0.01);

        assert_eq!(compare_rank(&fast, &slow), Ordering::Less);
        assert_eq!(compare_rank(&cheap, &fast), Ordering::Less);
    }

    #[test]
    fn latency_ascending_lists_fastest_first() {
        let entries = vec![
            model("m1", "A", 80.0, 300.0, 0.01),
            model("m2", "B", 90.0, 150.0, 0.02),
            model("m3", "C", 70.0, 900.0, 0.03),
        ];

        let asc = sort_entries(&entries, ModelSortKey::LatencyMs, SortDirection::Asc);
        assert_eq!(asc[0].id, "m2");
        let desc = sort_entries(&entries, ModelSortKey::LatencyMs, SortDirection::Desc);
        assert_eq!(desc[0].id, "m3");
    }

    #[test]
    fn every_sort_key_resolves_to_its_own_field() {
        for key in ModelSortKey::all() {
            assert_eq!(key.spec().id, key.as_str());
        }
    }
}
