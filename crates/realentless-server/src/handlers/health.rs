use axum::{extract::State, Json};
use serde_json::Value;

use crate::app_state::AppState;

/// Health check endpoint. Does not touch the backend.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "server": state.server_name,
        "version": state.server_version,
    }))
}
