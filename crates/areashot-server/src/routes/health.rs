use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(json!({
        "status": "ok",
        "uptime_secs": uptime_secs,
    }))
}
