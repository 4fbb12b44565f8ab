use std::sync::Arc;

use realentless_core::traits::LevelsBackend;

/// Name reported to MCP clients during `initialize`.
pub const SERVER_NAME: &str = "Realentless MCP";

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn LevelsBackend>,
    pub server_name: String,
    pub server_version: String,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn LevelsBackend>) -> Self {
        Self {
            backend,
            server_name: SERVER_NAME.to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
