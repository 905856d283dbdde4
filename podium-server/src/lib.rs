//! # Podium Server
//!
//! Read-only HTTP API over the Podium leaderboards.
//!
//! - `/api/v1/algorithms` and `/api/v1/models`: filtered, sorted, paginated
//!   listings, summary tiles and per-entry detail
//! - `/api/v1/download`: evaluation artifacts from the configured test run
//! - `/health`
//!
//! Leaderboards are loaded once at startup and shared behind `Arc`s.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use errors::{AppError, AppResult};
pub use infra::app_state::AppState;
