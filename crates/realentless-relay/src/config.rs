use std::time::Duration;

/// Production endpoint that accepts `generateLevels` JSON-RPC calls.
pub const DEFAULT_BACKEND_URL: &str =
    "https://realentless-backend.vercel.app/api/mcp/generateLevels";

/// Upper bound on a whole backend round trip, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how the relay reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub url: String,
    pub timeout: Duration,
}

impl RelayConfig {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
