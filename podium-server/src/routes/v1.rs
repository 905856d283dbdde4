use axum::{Router, routing::get};

use crate::{
    AppState,
    handlers::{download, leaderboard::leaderboard_router},
};

/// Create all v1 API routes
pub fn create_v1_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/download", get(download::download_handler))
        .nest("/algorithms", leaderboard_router(state.algorithms.clone()))
        .nest("/models", leaderboard_router(state.models.clone()))
}
