//! Leaderboard generation command.
//!
//! Turns an evaluation results tree into the JSON document served by the
//! algorithm leaderboard. Every option can be given as a flag or through the
//! environment.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use podium_core::ingest::{GenerateConfig, GenerationReport, generate_leaderboard};
use tracing::info;

/// Generate the algorithm leaderboard from CSV evaluation results
#[derive(Parser, Debug, Clone)]
#[command(name = "podium-generate", version)]
pub struct GenerateArgs {
    /// Directory holding one subdirectory of score exports per algorithm
    #[arg(long, env = "RESULTS_DIR", default_value = "results")]
    pub results_dir: PathBuf,

    /// Where to write the leaderboard JSON
    #[arg(long, env = "LEADERBOARD_OUTPUT", default_value = "data/leaderboard.json")]
    pub output: PathBuf,

    /// Curated algorithm metadata (families, descriptions, dataset profiles)
    #[arg(
        long,
        env = "ALGORITHM_METADATA",
        default_value = "data/algorithm-metadata.json"
    )]
    pub metadata: PathBuf,

    /// Evaluation timestamp stamped on every entry (RFC 3339); defaults to now
    #[arg(long, env = "LEADERBOARD_EVALUATED_AT")]
    pub evaluated_at: Option<DateTime<Utc>>,
}

impl GenerateArgs {
    pub fn config(&self) -> GenerateConfig {
        GenerateConfig {
            results_dir: self.results_dir.clone(),
            output_path: self.output.clone(),
            metadata_path: self.metadata.clone(),
        }
    }
}

/// Run one generation and log where the output went.
pub fn run(args: &GenerateArgs) -> anyhow::Result<GenerationReport> {
    if !args.results_dir.is_dir() {
        anyhow::bail!(
            "results directory {} does not exist",
            args.results_dir.display()
        );
    }

    let evaluated_at = args.evaluated_at.unwrap_or_else(Utc::now);
    let report = generate_leaderboard(&args.config(), evaluated_at)
        .context("error generating leaderboard")?;

    info!(
        entries = report.entries.len(),
        score_files = report.score_files,
        category_files = report.category_files,
        output = %report.output_path.display(),
        "done"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_repository_layout() {
        let args = GenerateArgs::try_parse_from(["podium-generate"]).unwrap();
        let config = args.config();
        assert_eq!(config.results_dir, PathBuf::from("results"));
        assert_eq!(config.output_path, PathBuf::from("data/leaderboard.json"));
        assert_eq!(config.metadata_path, PathBuf::from("data/algorithm-metadata.json"));
        assert!(args.evaluated_at.is_none());
    }

    #[test]
    fn parses_an_explicit_timestamp() {
        let args = GenerateArgs::try_parse_from([
            "podium-generate",
            "--evaluated-at",
            "2026-02-24T10:00:00Z",
        ])
        .unwrap();
        assert_eq!(
            args.evaluated_at.map(|at| at.to_rfc3339()),
            Some("2026-02-24T10:00:00+00:00".to_string())
        );
    }

    #[test]
    fn missing_results_dir_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs::try_parse_from([
            "podium-generate",
            "--results-dir",
            dir.path().join("absent").to_str().unwrap(),
        ])
        .unwrap();
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
