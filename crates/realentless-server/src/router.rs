use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::handlers;

/// Build the HTTP transport: health probe plus the MCP endpoint.
///
/// `GET /mcp` is answered with 405 since the gateway never pushes
/// server-initiated messages.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/mcp", post(handlers::mcp_request))
        .layer(TraceLayer::new_for_http())
        // MCP clients (Inspector, browser-hosted agents) call from arbitrary origins
        .layer(CorsLayer::permissive())
        .with_state(state)
}
