use std::error::Error as _;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use realentless_core::error::Error;
use realentless_core::traits::LevelsBackend;
use realentless_core::types::GenerateLevelsParams;
use realentless_mcp::{JsonRpcOutcome, JsonRpcRequest, GENERATE_LEVELS};

use crate::config::RelayConfig;

/// Correlation id put on every outbound envelope. Each call is a single
/// request on its own, so the id never needs to vary.
pub const BACKEND_REQUEST_ID: i64 = 1;

/// Forwards `generateLevels` invocations to the backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: Client,
    config: RelayConfig,
}

impl HttpRelay {
    /// Create a relay for the given backend.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new(config: RelayConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Transport(describe(&e)))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Build the JSON-RPC envelope sent upstream for one invocation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the params cannot be serialized.
    pub fn envelope(params: &GenerateLevelsParams) -> Result<JsonRpcRequest, Error> {
        let params = serde_json::to_value(params)
            .map_err(|e| Error::Transport(format!("could not encode params: {e}")))?;
        Ok(JsonRpcRequest::new(
            Value::from(BACKEND_REQUEST_ID),
            GENERATE_LEVELS,
            params,
        ))
    }
}

#[async_trait]
impl LevelsBackend for HttpRelay {
    async fn generate_levels(&self, params: GenerateLevelsParams) -> Result<Value, Error> {
        let outcome = self.relay(params).await;
        if let Err(err) = &outcome {
            tracing::warn!(
                url = %self.config.url,
                kind = err.kind(),
                "generateLevels relay failed: {err}"
            );
        }
        outcome
    }
}

impl HttpRelay {
    /// One round trip: send the envelope, then interpret status and body.
    async fn relay(&self, params: GenerateLevelsParams) -> Result<Value, Error> {
        let envelope = Self::envelope(&params)?;
        tracing::debug!(
            url = %self.config.url,
            user_id = %params.user_id,
            levels = params.levels.len(),
            exercises = params.exercises.len(),
            "Sending generateLevels to backend"
        );

        let response = self
            .client
            .post(&self.config.url)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| Error::Transport(describe(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(describe(&e)))?;

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: Value = serde_json::from_str(&body)
            .map_err(|e| Error::Transport(format!("invalid JSON in response body: {e}")))?;

        match JsonRpcOutcome::classify(parsed) {
            JsonRpcOutcome::Result(result) => {
                tracing::info!(status = status.as_u16(), "Backend accepted generateLevels");
                Ok(result)
            }
            JsonRpcOutcome::Error(error) => Err(Error::Backend(error)),
            JsonRpcOutcome::Malformed(body) => Err(Error::UnexpectedResponse(body)),
        }
    }
}

/// Flatten a reqwest error and its causes into one line, since the top-level
/// message alone rarely names the actual failure.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    if err.is_timeout() && !message.contains("timed out") {
        message.push_str(" (timed out)");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_shape() {
        let params = GenerateLevelsParams {
            user_id: "u1".to_string(),
            levels: vec![],
            exercises: vec![],
        };
        let envelope = serde_json::to_value(HttpRelay::envelope(&params).unwrap()).unwrap();
        assert_eq!(
            envelope,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "generateLevels",
                "params": {"userId": "u1", "levels": [], "exercises": []}
            })
        );
    }

    #[test]
    fn envelope_params_untouched() {
        let level = json!({"id": "level-1", "title": {"en": "Beginner", "fr": "Débutant"}, "position": 1});
        let exercise = json!({"id": "exercise-1", "type": "MIND", "userLevelId": "level-1"});
        let params = GenerateLevelsParams {
            user_id: "6c7e2bee".to_string(),
            levels: vec![level.clone()],
            exercises: vec![exercise.clone()],
        };
        let envelope = HttpRelay::envelope(&params).unwrap();
        let sent = envelope.params.unwrap();

        let keys: Vec<&String> = sent.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(sent["levels"], json!([level]));
        assert_eq!(sent["exercises"], json!([exercise]));
    }
}
