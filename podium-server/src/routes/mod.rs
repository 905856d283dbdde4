pub mod v1;

use axum::{Router, routing::get};

use crate::{AppState, handlers::health};

/// Create the main router with all API versions
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1", v1::create_v1_router(state.clone()))
        .with_state(state)
}
