use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::AppState;

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "algorithms": state.algorithms.len(),
        "models": state.models.len(),
    }))
}
