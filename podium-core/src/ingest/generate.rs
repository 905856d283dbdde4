//! Results directory to leaderboard JSON

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use podium_model::{AlgorithmEntry, AttackScores};
use tracing::{debug, info};

use super::csv::{
    CategoryScoreRow, ScoreRow, parse_category_scores_csv, parse_scores_csv,
};
use super::estimate::{estimate_ber, estimate_psnr, estimate_ssim};
use super::metadata::AlgorithmMetadata;
use crate::error::{PodiumError, Result};
use crate::query::sorting::MetricKey;
use crate::variants::ALGORITHM_ID_PREFIX;

/// Category holding the clean (unattacked) metrics.
pub const CLEAN_CATEGORY: &str = "none";
/// Used for clean metrics when no `none` row exists.
pub const CAPACITY_CATEGORY: &str = "capacity";

const BY_CATEGORY_MARKER: &str = "by-category";

/// Score exports found in one algorithm directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreFiles {
    pub scores: Option<PathBuf>,
    pub category_scores: Option<PathBuf>,
}

/// Inputs and output of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    pub results_dir: PathBuf,
    pub output_path: PathBuf,
    pub metadata_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub entries: Vec<AlgorithmEntry>,
    pub output_path: PathBuf,
    pub score_files: usize,
    pub category_files: usize,
}

/// Pick the first `scores*.csv` that is not a category export, and the
/// first `scores*by-category*.csv`. File names are visited in sorted order.
pub fn find_score_files(dir: &Path) -> Result<ScoreFiles> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map_err(|source| PodiumError::io(dir, source))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    let is_scores = |name: &&String| name.starts_with("scores") && name.ends_with(".csv");

    Ok(ScoreFiles {
        scores: names
            .iter()
            .filter(is_scores)
            .find(|name| !name.contains(BY_CATEGORY_MARKER))
            .map(|name| dir.join(name)),
        category_scores: names
            .iter()
            .filter(is_scores)
            .find(|name| name.contains(BY_CATEGORY_MARKER))
            .map(|name| dir.join(name)),
    })
}

/// Rows gathered from every algorithm directory of a results tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedResults {
    pub scores: Vec<ScoreRow>,
    pub categories: Vec<CategoryScoreRow>,
    pub score_files: usize,
    pub category_files: usize,
}

/// Read the score exports of every immediate subdirectory of `results_dir`.
pub fn collect_results(results_dir: &Path) -> Result<CollectedResults> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(results_dir)
        .map_err(|source| PodiumError::io(results_dir, source))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_dir()))
        .map(|entry| entry.path())
        .collect();
    dirs.sort();

    let mut collected = CollectedResults::default();
    for dir in dirs {
        let files = find_score_files(&dir)?;

        if let Some(path) = files.scores {
            info!(path = %path.display(), "found scores");
            collected.scores.extend(parse_scores_csv(&path)?);
            collected.score_files += 1;
        }
        if let Some(path) = files.category_scores {
            info!(path = %path.display(), "found category scores");
            collected.categories.extend(parse_category_scores_csv(&path)?);
            collected.category_files += 1;
        }
    }
    Ok(collected)
}

/// `alg-<lowercase ascii alphanumerics>`, or `None` when nothing is left.
pub fn slug_id(name: &str) -> Option<String> {
    let slug: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!slug.is_empty()).then(|| format!("{ALGORITHM_ID_PREFIX}-{slug}"))
}

/// Ids stay unique: a repeated slug gets `-2`, `-3`, ... appended.
#[derive(Debug, Default)]
struct IdAllocator {
    taken: HashSet<String>,
}

impl IdAllocator {
    fn allocate(&mut self, name: &str, index: usize) -> String {
        let base = slug_id(name)
            .unwrap_or_else(|| format!("{ALGORITHM_ID_PREFIX}-{}", index + 1));
        let mut candidate = base.clone();
        let mut suffix = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Join score rows with their category rows and metadata into entries,
/// ordered by composite score, highest first. Rows with equal composite
/// keep their input order.
pub fn generate_entries(
    scores: &[ScoreRow],
    categories: &[CategoryScoreRow],
    metadata: &AlgorithmMetadata,
    evaluated_at: DateTime<Utc>,
) -> Vec<AlgorithmEntry> {
    let mut by_algorithm: HashMap<&str, HashMap<&str, &CategoryScoreRow>> =
        HashMap::new();
    for row in categories {
        by_algorithm
            .entry(row.algorithm.as_str())
            .or_default()
            .insert(row.attack_category.as_str(), row);
    }

    let empty = HashMap::new();
    let mut ids = IdAllocator::default();

    let mut entries: Vec<AlgorithmEntry> = scores
        .iter()
        .enumerate()
        .map(|(index, score)| {
            let categories = by_algorithm
                .get(score.algorithm.as_str())
                .unwrap_or(&empty);
            let category = |name: &str| categories.get(name).copied();
            let distortion = |name: &str, fallback: f64| {
                category(name).map_or(fallback, |row| row.distortion_score)
            };

            let clean = category(CLEAN_CATEGORY).or_else(|| category(CAPACITY_CATEGORY));
            if clean.is_none() {
                debug!(algorithm = %score.algorithm, "no clean category row; estimating metrics");
            }
            let overall = score.overall_score;
            let info = metadata.resolve(&score.algorithm);

            AlgorithmEntry {
                id: ids.allocate(&score.algorithm, index),
                algorithm_name: score.algorithm.clone(),
                dataset_profile: info.dataset_profile,
                composite_score: overall,
                psnr_db: clean.map_or_else(|| estimate_psnr(overall), |row| row.avg_psnr),
                ber: clean.map_or_else(|| estimate_ber(overall), |row| row.avg_ber),
                payload_bpp: metadata.defaults.payload_bpp,
                runtime_ms: metadata.defaults.runtime_ms,
                last_evaluated_iso: evaluated_at,
                algorithm_family: Some(info.family),
                description: Some(info.description),
                ssim: clean.map_or_else(|| estimate_ssim(overall), |row| row.avg_ssim),
                recovery_rate: score.overall_recovery_rate * 100.0,
                attack_scores: AttackScores {
                    compression_score: Some(distortion("compression", score.compression_score)),
                    blur_score: Some(distortion("filtering", score.blur_score)),
                    noise_score: Some(distortion("noise", score.noise_score)),
                    geometric_score: Some(distortion("geometric", score.geometric_score)),
                    capacity_score: Some(distortion(CAPACITY_CATEGORY, score.capacity_score)),
                },
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        MetricKey::new(b.composite_score).cmp(&MetricKey::new(a.composite_score))
    });
    entries
}

/// Serialize entries as pretty JSON, creating parent directories.
pub fn write_leaderboard(path: &Path, entries: &[AlgorithmEntry]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| PodiumError::io(parent, source))?;
    }
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|source| PodiumError::io(path, source))
}

/// Run the whole pipeline: collect, join, write.
pub fn generate_leaderboard(
    config: &GenerateConfig,
    evaluated_at: DateTime<Utc>,
) -> Result<GenerationReport> {
    info!(results_dir = %config.results_dir.display(), "scanning results directory");

    let metadata = AlgorithmMetadata::load(&config.metadata_path)?;
    let collected = collect_results(&config.results_dir)?;
    if collected.scores.is_empty() {
        return Err(PodiumError::NoScoreFiles(config.results_dir.clone()));
    }

    let entries = generate_entries(
        &collected.scores,
        &collected.categories,
        &metadata,
        evaluated_at,
    );
    write_leaderboard(&config.output_path, &entries)?;

    info!(
        entries = entries.len(),
        output = %config.output_path.display(),
        "generated leaderboard"
    );

    Ok(GenerationReport {
        entries,
        output_path: config.output_path.clone(),
        score_files: collected.score_files,
        category_files: collected.category_files,
    })
}
