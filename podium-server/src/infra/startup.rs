use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::Method;
use podium_core::{Leaderboard, Normalize, RankedEntry};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::infra::{app_state::AppState, config::Config};
use crate::routes;

/// Load one leaderboard. A missing file serves an empty board so a fresh
/// deployment can start before its first generation run.
pub fn load_leaderboard<E>(path: &Path, label: &str) -> Result<Leaderboard<E>>
where
    E: RankedEntry + Normalize,
{
    match Leaderboard::load(path) {
        Ok(board) => Ok(board),
        Err(err) if err.is_not_found() => {
            warn!(
                path = %path.display(),
                leaderboard = label,
                "leaderboard data not found; serving an empty leaderboard"
            );
            Ok(Leaderboard::empty())
        }
        Err(err) => Err(err)
            .with_context(|| format!("failed to load {label} leaderboard from {}", path.display())),
    }
}

/// Load both leaderboards named by `config`.
pub fn load_state(config: Config) -> Result<AppState> {
    let algorithms = load_leaderboard(&config.data.algorithm_data_path, "algorithm")?;
    let models = load_leaderboard(&config.data.model_data_path, "model")?;

    info!(
        algorithms = algorithms.len(),
        models = models.len(),
        results_dir = %config.results.results_dir.display(),
        "leaderboards ready"
    );

    Ok(AppState::new(config, algorithms, models))
}

/// Full application router with middleware.
pub fn build_app(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    routes::create_app_router(state)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
}
