use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::app_state::AppState;
use crate::rpc;

/// Handle MCP JSON-RPC requests over Streamable HTTP.
///
/// Requests are answered inline with a JSON body; notifications get 202 and
/// no body.
pub async fn mcp_request(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let value = match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::warn!("Rejected MCP request body: {rejection}");
            return Json(rpc::parse_error(&rejection.body_text())).into_response();
        }
    };

    match rpc::handle_value(&state, value).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
