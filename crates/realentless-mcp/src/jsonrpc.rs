use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Protocol version literal carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    /// `None` when the member is absent (a notification). An explicit `null`
    /// stays `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "present_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Build a request envelope with the fixed `"2.0"` version tag.
    pub fn new(id: Value, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(id),
            method: method.into(),
            params: Some(params),
        }
    }

    /// Notifications carry no id and expect no response.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Id to echo back in the response.
    pub fn response_id(&self) -> Value {
        self.id.clone().unwrap_or(Value::Null)
    }

    /// Whether the envelope declares the supported protocol version.
    pub fn has_valid_version(&self) -> bool {
        self.jsonrpc == JSONRPC_VERSION
    }
}

/// Only runs when `id` is present, so `null` maps to `Some(Null)`.
fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self::error_with_data(id, code, message, None)
    }

    /// Create an error response carrying extra structured detail.
    pub fn error_with_data(
        id: Value,
        code: i32,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data,
            }),
        }
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Standard JSON-RPC error codes.
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// What an upstream JSON-RPC response body turned out to be.
///
/// Classification is by key presence only, so payloads of any shape survive
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonRpcOutcome {
    /// The body had a `result` member (which may itself be `null`).
    Result(Value),
    /// The body had an `error` member and no `result`.
    Error(Value),
    /// Neither member was present, or the body was not an object. Holds the
    /// whole body.
    Malformed(Value),
}

impl JsonRpcOutcome {
    /// Sort a parsed response body into one of the three outcomes.
    pub fn classify(body: Value) -> Self {
        let mut map = match body {
            Value::Object(map) => map,
            other => return Self::Malformed(other),
        };

        if let Some(result) = map.remove("result") {
            return Self::Result(result);
        }
        if let Some(error) = map.remove("error") {
            return Self::Error(error);
        }
        Self::Malformed(Value::Object(map))
    }
}
