//! Readers for the evaluation harness CSV exports
//!
//! Columns are positional. Cells that do not parse degrade to zero, the same
//! leniency the harness output has always been read with, so one malformed
//! cell never drops a row.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{PodiumError, Result};

/// One row of `scores*.csv`: an algorithm's overall robustness results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreRow {
    pub algorithm: String,
    pub compression_score: f64,
    pub blur_score: f64,
    pub noise_score: f64,
    pub geometric_score: f64,
    pub combo_score: Option<f64>,
    pub capacity_score: f64,
    pub overall_score: f64,
    pub total_images: i64,
    pub total_payloads_recovered: i64,
    /// Fraction in 0-1.
    pub overall_recovery_rate: f64,
}

/// One row of `scores*by-category*.csv`: results for a single attack
/// category. The `none` category holds the clean (unattacked) metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryScoreRow {
    pub algorithm: String,
    pub attack_category: String,
    pub avg_ssim: f64,
    pub avg_psnr: f64,
    pub avg_ber: f64,
    pub recovery_rate: f64,
    pub distortion_score: f64,
    pub robustness_score: f64,
    pub overall_score: f64,
    pub images_tested: i64,
}

pub fn parse_scores_csv(path: &Path) -> Result<Vec<ScoreRow>> {
    read_rows(path, score_row)
}

pub fn parse_category_scores_csv(path: &Path) -> Result<Vec<CategoryScoreRow>> {
    read_rows(path, category_row)
}

/// Parse score rows from any reader; `path` only labels errors.
pub fn read_scores<R: Read>(reader: R, path: &Path) -> Result<Vec<ScoreRow>> {
    collect_rows(reader, path, score_row)
}

pub fn read_category_scores<R: Read>(
    reader: R,
    path: &Path,
) -> Result<Vec<CategoryScoreRow>> {
    collect_rows(reader, path, category_row)
}

fn read_rows<T>(path: &Path, build: fn(&StringRecord) -> T) -> Result<Vec<T>> {
    let file = std::fs::File::open(path).map_err(|source| PodiumError::io(path, source))?;
    collect_rows(file, path, build)
}

fn collect_rows<R: Read, T>(
    reader: R,
    path: &Path,
    build: fn(&StringRecord) -> T,
) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| PodiumError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(build(&record));
    }
    Ok(rows)
}

fn score_row(record: &StringRecord) -> ScoreRow {
    let cell = |index: usize| record.get(index).unwrap_or("");
    ScoreRow {
        algorithm: cell(0).trim().to_string(),
        compression_score: lenient_float(cell(1)),
        blur_score: lenient_float(cell(2)),
        noise_score: lenient_float(cell(3)),
        geometric_score: lenient_float(cell(4)),
        combo_score: optional_float(cell(5)),
        capacity_score: lenient_float(cell(6)),
        overall_score: lenient_float(cell(7)),
        total_images: lenient_int(cell(8)),
        total_payloads_recovered: lenient_int(cell(9)),
        overall_recovery_rate: lenient_float(cell(10)),
    }
}

fn category_row(record: &StringRecord) -> CategoryScoreRow {
    let cell = |index: usize| record.get(index).unwrap_or("");
    CategoryScoreRow {
        algorithm: cell(0).trim().to_string(),
        attack_category: cell(1).trim().to_string(),
        avg_ssim: lenient_float(cell(2)),
        avg_psnr: lenient_float(cell(3)),
        avg_ber: lenient_float(cell(4)),
        recovery_rate: lenient_float(cell(5)),
        distortion_score: lenient_float(cell(6)),
        robustness_score: lenient_float(cell(7)),
        overall_score: lenient_float(cell(8)),
        images_tested: lenient_int(cell(9)),
    }
}

/// Longest numeric prefix of `raw` after leading whitespace, or `None`.
/// `"12.5abc"` reads as 12.5.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

fn lenient_float(raw: &str) -> f64 {
    parse_float_prefix(raw).unwrap_or(0.0)
}

fn optional_float(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        None
    } else {
        parse_float_prefix(raw)
    }
}

/// Leading decimal integer of `raw`, or zero.
fn lenient_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'+' | b'-')));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    s[..sign_len + digits].parse().unwrap_or(0)
}
