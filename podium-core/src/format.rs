//! Display formatting for leaderboard values.
//!
//! Fixed-precision helpers for presenting entries to people. Dates are
//! rendered in UTC.

use chrono::{DateTime, Utc};

/// Shown for values that were never measured.
pub const MISSING: &str = "-";

/// Shown for evaluations without a usable timestamp.
pub const UNKNOWN_DATE: &str = "Unknown";

/// Round half toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn fixed(value: f64, digits: usize) -> String {
    // Adding zero folds negative zero into positive zero.
    format!("{:.*}", digits, value + 0.0)
}

pub fn format_psnr(value: f64) -> String {
    format!("{} dB", fixed(value, 1))
}

pub fn format_ber(value: f64) -> String {
    fixed(value, 3)
}

pub fn format_payload(value: f64) -> String {
    format!("{} bpp", fixed(value, 2))
}

pub fn format_runtime(value: f64) -> String {
    format!("{} ms", fixed(round_half_up(value), 0))
}

pub fn format_latency(value: f64) -> String {
    format_runtime(value)
}

pub fn format_ssim(value: f64) -> String {
    fixed(value, 3)
}

/// `95.0%` from a 0-100 percentage.
pub fn format_recovery_rate(value: f64) -> String {
    format!("{}%", fixed(value, 1))
}

pub fn format_cost(value: f64) -> String {
    format!("${}", fixed(value, 3))
}

pub fn format_composite(value: f64) -> String {
    fixed(value, 1)
}

/// One decimal, or [`MISSING`] when the score was not evaluated.
pub fn format_sub_score(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |score| fixed(score, 1))
}

/// `Feb 24 at 10:00 AM`. The epoch stands for "no timestamp" after
/// normalization and renders as [`UNKNOWN_DATE`].
pub fn format_last_evaluated(instant: DateTime<Utc>) -> String {
    if instant == DateTime::<Utc>::UNIX_EPOCH {
        return UNKNOWN_DATE.to_string();
    }
    instant.format("%b %-d at %-I:%M %p").to_string()
}
