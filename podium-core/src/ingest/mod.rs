//! Leaderboard generation from evaluation results
//!
//! The evaluation harness writes one directory per algorithm, each holding a
//! `scores*.csv` export and optionally a per-category
//! `scores*by-category*.csv`. This module joins those exports with curated
//! metadata and writes the JSON document the algorithm leaderboard loads.

pub mod csv;
pub mod estimate;
pub mod generate;
pub mod metadata;

pub use self::csv::{
    CategoryScoreRow, ScoreRow, parse_category_scores_csv, parse_scores_csv,
};
pub use estimate::{estimate_ber, estimate_psnr, estimate_ssim};
pub use generate::{
    CollectedResults, GenerateConfig, GenerationReport, ScoreFiles,
    collect_results, find_score_files, generate_entries, generate_leaderboard,
    slug_id, write_leaderboard,
};
pub use metadata::{AlgorithmInfo, AlgorithmMetadata, GenerationDefaults};
