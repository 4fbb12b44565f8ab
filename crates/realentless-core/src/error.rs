use serde_json::Value;

/// Failure of a single `generateLevels` relay round trip.
///
/// Every way a call can go wrong ends up in exactly one of these variants, so
/// the gateway only ever has one failure type to report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a usable response (connection, DNS,
    /// timeout, unreadable or non-JSON body).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The JSON-RPC envelope carried an `error` member.
    #[error("backend error: {0}")]
    Backend(Value),

    /// The JSON-RPC envelope carried neither `result` nor `error`.
    #[error("unexpected response format: {0}")]
    UnexpectedResponse(Value),
}

impl Error {
    /// Stable tag naming the failure kind, for machine consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::HttpStatus { .. } => "http_status",
            Self::Backend(_) => "backend",
            Self::UnexpectedResponse(_) => "unexpected_response",
        }
    }
}
