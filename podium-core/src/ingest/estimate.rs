//! Empirical estimates for clean-image metrics
//!
//! Used only when the category export has no clean (`none` or `capacity`)
//! row for an algorithm. Each step table maps a minimum overall score to an
//! estimate; scores below the last step take the floor value.

const PSNR_STEPS: [(f64, f64); 11] = [
    (96.0, 44.2),
    (95.0, 43.4),
    (94.0, 42.9),
    (93.0, 42.6),
    (92.0, 42.2),
    (91.0, 41.8),
    (90.0, 41.5),
    (89.0, 41.1),
    (88.0, 40.7),
    (87.0, 40.3),
    (86.0, 39.9),
];
const PSNR_FLOOR: f64 = 39.5;

const BER_STEPS: [(f64, f64); 11] = [
    (96.0, 0.006),
    (95.0, 0.008),
    (94.0, 0.010),
    (93.0, 0.012),
    (92.0, 0.013),
    (91.0, 0.014),
    (90.0, 0.015),
    (89.0, 0.016),
    (88.0, 0.018),
    (87.0, 0.020),
    (86.0, 0.022),
];
const BER_FLOOR: f64 = 0.024;

const SSIM_BASE: f64 = 0.945;
const SSIM_PIVOT: f64 = 84.0;
const SSIM_SLOPE: f64 = 0.0018;

fn step(table: &[(f64, f64)], floor: f64, overall: f64) -> f64 {
    table
        .iter()
        .find(|(threshold, _)| overall >= *threshold)
        .map_or(floor, |(_, value)| *value)
}

pub fn estimate_psnr(overall: f64) -> f64 {
    step(&PSNR_STEPS, PSNR_FLOOR, overall)
}

pub fn estimate_ber(overall: f64) -> f64 {
    step(&BER_STEPS, BER_FLOOR, overall)
}

/// Linear in the overall score, capped at 1.
pub fn estimate_ssim(overall: f64) -> f64 {
    (SSIM_BASE + (overall - SSIM_PIVOT) * SSIM_SLOPE).min(1.0)
}
