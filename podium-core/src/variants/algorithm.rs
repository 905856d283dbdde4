//! Steganography algorithm leaderboard

use chrono::{DateTime, Utc};
use podium_model::{
    AlgorithmEntry, AlgorithmSortKey, AttackScores, Better, SubScore,
};
use serde_json::Value;

use crate::normalize::{Normalize, RawRecord};
use crate::query::sorting::{
    FieldKind, FieldSpec, MetricSpec, RankProfile, RankedEntry, SortField,
};

pub const ALGORITHM_ID_PREFIX: &str = "alg";
pub const UNKNOWN_ALGORITHM: &str = "Unknown algorithm";
pub const UNKNOWN_PROFILE: &str = "Unknown profile";

/// Structural similarity reads as perfect when a record does not report it.
pub const SSIM_FALLBACK: f64 = 1.0;

impl Normalize for AlgorithmEntry {
    fn normalize(raw: &Value, index: usize) -> Self {
        let record = RawRecord::new(raw);

        AlgorithmEntry {
            id: record.id("id", <Self as RankedEntry>::ID_PREFIX, index),
            algorithm_name: record.text("algorithmName", UNKNOWN_ALGORITHM),
            dataset_profile: record.text("datasetProfile", UNKNOWN_PROFILE),
            composite_score: record.number("compositeScore"),
            psnr_db: record.number("psnrDb"),
            ber: record.number("ber"),
            payload_bpp: record.number("payloadBpp"),
            runtime_ms: record.number("runtimeMs"),
            last_evaluated_iso: record.timestamp("lastEvaluatedIso"),
            algorithm_family: record.optional_text("algorithmFamily"),
            description: record.optional_text("description"),
            ssim: record.number_or("ssim", SSIM_FALLBACK),
            recovery_rate: record.number("recoveryRate"),
            attack_scores: AttackScores {
                compression_score: record.optional_number("compressionScore"),
                blur_score: record.optional_number("blurScore"),
                noise_score: record.optional_number("noiseScore"),
                geometric_score: record.optional_number("geometricScore"),
                capacity_score: record.optional_number("capacityScore"),
            },
        }
    }
}

fn composite(entry: &AlgorithmEntry) -> f64 {
    entry.composite_score
}

fn psnr(entry: &AlgorithmEntry) -> f64 {
    entry.psnr_db
}

fn ssim(entry: &AlgorithmEntry) -> f64 {
    entry.ssim
}

fn ber(entry: &AlgorithmEntry) -> f64 {
    entry.ber
}

fn payload(entry: &AlgorithmEntry) -> f64 {
    entry.payload_bpp
}

fn recovery(entry: &AlgorithmEntry) -> f64 {
    entry.recovery_rate
}

fn runtime(entry: &AlgorithmEntry) -> f64 {
    entry.runtime_ms
}

fn evaluated(entry: &AlgorithmEntry) -> DateTime<Utc> {
    entry.last_evaluated_iso
}

const COMPOSITE: MetricSpec<AlgorithmEntry> = MetricSpec {
    id: "compositeScore",
    label: "Composite score",
    better: Better::Higher,
    value: composite,
};

const PSNR: MetricSpec<AlgorithmEntry> = MetricSpec {
    id: "psnrDb",
    label: "PSNR",
    better: Better::Higher,
    value: psnr,
};

const BER: MetricSpec<AlgorithmEntry> = MetricSpec {
    id: "ber",
    label: "Bit error rate",
    better: Better::Lower,
    value: ber,
};

const PAYLOAD: MetricSpec<AlgorithmEntry> = MetricSpec {
    id: "payloadBpp",
    label: "Payload",
    better: Better::Higher,
    value: payload,
};

static RANK_PROFILE: RankProfile<AlgorithmEntry> = RankProfile {
    primary: COMPOSITE,
    tie_breakers: &[PSNR, BER, PAYLOAD],
};

static SUMMARY_METRICS: [MetricSpec<AlgorithmEntry>; 4] =
    [COMPOSITE, PSNR, BER, PAYLOAD];

static RANK_FIELD: FieldSpec<AlgorithmEntry> = FieldSpec {
    id: "rank",
    better: Better::Lower,
    kind: FieldKind::Rank,
};
static COMPOSITE_FIELD: FieldSpec<AlgorithmEntry> = FieldSpec {
    id: "compositeScore",
    better: Better::Higher,
    kind: FieldKind::Metric(composite),
};
static PSNR_FIELD: FieldSpec<AlgorithmEntry> = FieldSpec {
    id: "psnrDb",
    better: Better::Higher,
    kind: FieldKind::Metric(psnr),
};
static SSIM_FIELD: FieldSpec<AlgorithmEntry> = FieldSpec {
    id: "ssim",
    better: Better::Higher,
    kind: FieldKind::Metric(ssim),
};
static BER_FIELD: FieldSpec<AlgorithmEntry> = FieldSpec {
    id: "ber",
    better: Better::Lower,
    kind: FieldKind::Metric(ber),
};
static PAYLOAD_FIELD: FieldSpec<AlgorithmEntry> = FieldSpec {
    id: "payloadBpp",
    better: Better::Higher,
    kind: FieldKind::Metric(payload),
};
static RECOVERY_FIELD: FieldSpec<AlgorithmEntry> = FieldSpec {
    id: "recoveryRate",
    better: Better::Higher,
    kind: FieldKind::Metric(recovery),
};
static RUNTIME_FIELD: FieldSpec<AlgorithmEntry> = FieldSpec {
    id: "runtimeMs",
    better: Better::Lower,
    kind: FieldKind::Metric(runtime),
};
static EVALUATED_FIELD: FieldSpec<AlgorithmEntry> = FieldSpec {
    id: "lastEvaluated",
    better: Better::Higher,
    kind: FieldKind::Timestamp(evaluated),
};

impl SortField for AlgorithmSortKey {
    type Entry = AlgorithmEntry;

    const RANK: Self = AlgorithmSortKey::Rank;

    fn spec(self) -> &'static FieldSpec<AlgorithmEntry> {
        match self {
            AlgorithmSortKey::Rank => &RANK_FIELD,
            AlgorithmSortKey::CompositeScore => &COMPOSITE_FIELD,
            AlgorithmSortKey::PsnrDb => &PSNR_FIELD,
            AlgorithmSortKey::Ssim => &SSIM_FIELD,
            AlgorithmSortKey::Ber => &BER_FIELD,
            AlgorithmSortKey::PayloadBpp => &PAYLOAD_FIELD,
            AlgorithmSortKey::RecoveryRate => &RECOVERY_FIELD,
            AlgorithmSortKey::RuntimeMs => &RUNTIME_FIELD,
            AlgorithmSortKey::LastEvaluated => &EVALUATED_FIELD,
        }
    }
}

impl RankedEntry for AlgorithmEntry {
    type SortKey = AlgorithmSortKey;

    const ID_PREFIX: &'static str = ALGORITHM_ID_PREFIX;

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
        &self.algorithm_name
    }

    fn group(&self) -> &str {
        &self.dataset_profile
    }

    fn family(&self) -> Option<&str> {
        self.algorithm_family.as_deref()
    }

    fn last_evaluated(&self) -> DateTime<Utc> {
        self.last_evaluated_iso
    }

    fn sub_scores(&self) -> Vec<SubScore> {
        self.attack_scores.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_a_complete_record() {
        let raw = json!({
            "id": "alg-hugo",
            "algorithmName": "HUGO",
            "datasetProfile": "BOSSBase-256",
            "compositeScore": "95",
            "psnrDb": 43.1,
            "ber": 0.01,
            "payloadBpp": 0.4,
            "runtimeMs": 120,
            "lastEvaluatedIso": "2026-02-24T10:00:00.000Z",
            "algorithmFamily": "Spatial",
            "ssim": 0.987,
            "recoveryRate": 97.5,
            "compressionScore": 92.4,
            "noiseScore": null
        });

        let entry = AlgorithmEntry::normalize(&raw, 0);
        assert_eq!(entry.id, "alg-hugo");
        assert_eq!(entry.composite_score, 95.0);
        assert_eq!(entry.runtime_ms, 120.0);
        assert_eq!(entry.algorithm_family.as_deref(), Some("Spatial"));
        assert_eq!(entry.description, None);
        assert_eq!(entry.attack_scores.compression_score, Some(92.4));
        assert_eq!(entry.attack_scores.noise_score, None);
        assert_eq!(entry.attack_scores.blur_score, None);
    }

    #[test]
    fn missing_fields_take_documented_defaults() {
        let entry = AlgorithmEntry::normalize(&json!({ "algorithmName": "" }), 2);
        assert_eq!(entry.id, "alg-3");
        assert_eq!(entry.algorithm_name, UNKNOWN_ALGORITHM);
        assert_eq!(entry.dataset_profile, UNKNOWN_PROFILE);
        assert_eq!(entry.composite_score, 0.0);
        assert_eq!(entry.ssim, SSIM_FALLBACK);
        assert_eq!(entry.recovery_rate, 0.0);
        assert_eq!(entry.last_evaluated_iso, DateTime::<Utc>::UNIX_EPOCH);
        assert!(entry.sub_scores().is_empty());
    }

    #[test]
    fn every_sort_key_resolves_to_its_own_field() {
        for key in AlgorithmSortKey::all() {
            assert_eq!(key.spec().id, key.as_str());
        }
        assert!(AlgorithmSortKey::RANK.spec().is_rank());
    }

    #[test]
    fn error_like_fields_prefer_lower_values() {
        assert_eq!(AlgorithmSortKey::Ber.spec().better, Better::Lower);
        assert_eq!(AlgorithmSortKey::RuntimeMs.spec().better, Better::Lower);
        assert_eq!(AlgorithmSortKey::Ssim.spec().better, Better::Higher);
        assert_eq!(AlgorithmSortKey::RecoveryRate.spec().better, Better::Higher);
    }
}
