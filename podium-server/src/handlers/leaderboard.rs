//! Listing, summary and detail endpoints shared by every leaderboard.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use podium_core::{
    EntryDetail, Leaderboard, LeaderboardQuery, LeaderboardSummary, QueryPage,
    RankedEntry, SortDirection,
    query::types::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Raw listing parameters. Everything arrives as text so that malformed
/// values produce the same JSON error body as unknown sort keys.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl ListParams {
    pub fn into_query<E: RankedEntry>(self) -> AppResult<LeaderboardQuery<E::SortKey>> {
        let sort = match non_blank(self.sort) {
            Some(raw) => raw.parse::<E::SortKey>()?,
            None => E::SortKey::default(),
        };
        let direction = match non_blank(self.direction) {
            Some(raw) => raw.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };

        Ok(LeaderboardQuery {
            search: self.q.unwrap_or_default(),
            sort,
            direction,
            page: parse_count("page", self.page, DEFAULT_PAGE)?,
            page_size: parse_count("page_size", self.page_size, DEFAULT_PAGE_SIZE)?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_count(name: &str, raw: Option<String>, default: usize) -> AppResult<usize> {
    match non_blank(raw) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::bad_request(format!("invalid {name}: {raw}"))),
        None => Ok(default),
    }
}

/// Routes for one leaderboard, carrying the board as their own state.
pub fn leaderboard_router<E, S>(board: Arc<Leaderboard<E>>) -> Router<S>
where
    E: RankedEntry + Serialize,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_entries::<E>))
        .route("/summary", get(summary::<E>))
        .route("/{name}", get(entry_detail::<E>))
        .with_state(board)
}

pub async fn list_entries<E>(
    State(board): State<Arc<Leaderboard<E>>>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<QueryPage<E>>>
where
    E: RankedEntry + Serialize,
{
    let query = params.into_query::<E>()?;
    Ok(Json(board.query(&query)))
}

pub async fn summary<E>(
    State(board): State<Arc<Leaderboard<E>>>,
) -> Json<LeaderboardSummary<E>>
where
    E: RankedEntry + Serialize,
{
    Json(board.summary())
}

pub async fn entry_detail<E>(
    State(board): State<Arc<Leaderboard<E>>>,
    Path(name): Path<String>,
) -> AppResult<Json<EntryDetail<E>>>
where
    E: RankedEntry + Serialize,
{
    debug!(name = %name, "looking up leaderboard entry");
    board
        .detail(&name)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no entry named {name}")))
}
