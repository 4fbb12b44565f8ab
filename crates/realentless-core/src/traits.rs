use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;
use crate::types::GenerateLevelsParams;

/// Upstream service that turns level and exercise descriptions into stored
/// records for a user.
#[async_trait]
pub trait LevelsBackend: Send + Sync {
    /// Forward one `generateLevels` invocation and return the backend's
    /// success payload unchanged.
    async fn generate_levels(&self, params: GenerateLevelsParams) -> Result<Value, Error>;
}
