//! Shared fixtures for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use podium_model::{AlgorithmEntry, AttackScores};

pub(crate) fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, day, hour, 0, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn algorithm(
    id: &str,
    name: &str,
    profile: &str,
    family: &str,
    composite: f64,
    psnr: f64,
    ber: f64,
    payload: f64,
    evaluated: DateTime<Utc>,
) -> AlgorithmEntry {
    AlgorithmEntry {
        id: id.to_string(),
        algorithm_name: name.to_string(),
        dataset_profile: profile.to_string(),
        composite_score: composite,
        psnr_db: psnr,
        ber,
        payload_bpp: payload,
        runtime_ms: 100.0,
        last_evaluated_iso: evaluated,
        algorithm_family: Some(family.to_string()),
        description: None,
        ssim: 0.98,
        recovery_rate: 95.0,
        attack_scores: AttackScores::default(),
    }
}

/// `a`: HUGO, `b`: S-UNIWARD (ties `a` on composite and PSNR, lower BER),
/// `c`: SteganoGAN (lowest composite, highest payload, oldest).
pub(crate) fn trio() -> Vec<AlgorithmEntry> {
    vec![
        algorithm("a", "HUGO", "BOSSBase-256", "Spatial", 95.0, 43.1, 0.010, 0.40, at(24, 10)),
        algorithm("b", "S-UNIWARD", "BOSSBase-512", "Spatial", 95.0, 43.1, 0.009, 0.38, at(24, 11)),
        algorithm("c", "SteganoGAN", "DIV2K-Color", "GAN", 90.0, 41.0, 0.015, 0.72, at(20, 10)),
    ]
}

pub(crate) fn ids<'a, I>(entries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a AlgorithmEntry>,
{
    entries.into_iter().map(|entry| entry.id.as_str()).collect()
}
