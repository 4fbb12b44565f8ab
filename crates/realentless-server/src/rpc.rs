//! MCP method dispatch shared by the HTTP and stdio transports.

use serde_json::Value;
use tracing::Instrument;

use realentless_core::types::GenerateLevelsParams;
use realentless_mcp::jsonrpc::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND,
    PARSE_ERROR,
};
use realentless_mcp::{
    JsonRpcRequest, JsonRpcResponse, ToolRegistry, GENERATE_LEVELS, PROTOCOL_VERSION,
};

use crate::app_state::AppState;

/// Handle one raw message as received by a transport.
///
/// Bytes that are not JSON get `PARSE_ERROR`; JSON that is not a request
/// object gets `INVALID_REQUEST`, echoing its `id` when one is readable.
pub async fn handle_message(state: &AppState, raw: &[u8]) -> Option<JsonRpcResponse> {
    let value: Value = match serde_json::from_slice(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Unparsable MCP message: {e}");
            return Some(parse_error(&e));
        }
    };
    handle_value(state, value).await
}

/// Handle a message that is already known to be JSON.
pub async fn handle_value(state: &AppState, value: Value) -> Option<JsonRpcResponse> {
    let id = value.get("id").cloned().unwrap_or(Value::Null);
    match serde_json::from_value::<JsonRpcRequest>(value) {
        Ok(req) => dispatch(state, req).await,
        Err(e) => {
            tracing::warn!("Invalid MCP request: {e}");
            Some(JsonRpcResponse::error(
                id,
                INVALID_REQUEST,
                format!("Invalid Request: {e}"),
            ))
        }
    }
}

/// Response for bytes that could not be read as JSON at all.
pub fn parse_error(err: &impl std::fmt::Display) -> JsonRpcResponse {
    JsonRpcResponse::error(Value::Null, PARSE_ERROR, format!("Parse error: {err}"))
}

/// Handle one JSON-RPC message. Returns `None` for notifications, which get
/// no response.
pub async fn dispatch(state: &AppState, req: JsonRpcRequest) -> Option<JsonRpcResponse> {
    if !req.has_valid_version() {
        return Some(JsonRpcResponse::error(
            req.response_id(),
            INVALID_REQUEST,
            format!(
                "Invalid Request: jsonrpc must be \"{JSONRPC_VERSION}\", got \"{}\"",
                req.jsonrpc
            ),
        ));
    }

    if req.is_notification() {
        tracing::info!("Received MCP notification: {}", req.method);
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(state, &req),
        "ping" => JsonRpcResponse::success(req.response_id(), serde_json::json!({})),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tools_call(state, &req).await,
        _ => JsonRpcResponse::error(
            req.response_id(),
            METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

fn handle_initialize(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(
        req.response_id(),
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": state.server_name,
                "version": state.server_version
            }
        }),
    )
}

fn handle_tools_list(req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = ToolRegistry::definitions();
    JsonRpcResponse::success(req.response_id(), serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = &req.params else {
        return JsonRpcResponse::error(req.response_id(), INVALID_PARAMS, "Missing params");
    };

    let tool_name = params
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()));

    if tool_name != GENERATE_LEVELS {
        return JsonRpcResponse::error(
            req.response_id(),
            INVALID_PARAMS,
            format!("Unknown tool: {tool_name}"),
        );
    }

    let args: GenerateLevelsParams = match serde_json::from_value(arguments) {
        Ok(args) => args,
        Err(e) => {
            return JsonRpcResponse::error(
                req.response_id(),
                INVALID_PARAMS,
                format!("Invalid arguments for {GENERATE_LEVELS}: {e}"),
            );
        }
    };

    let span = tracing::info_span!(
        "generate_levels",
        invocation_id = %uuid::Uuid::new_v4(),
        user_id = %args.user_id,
    );

    match state.backend.generate_levels(args).instrument(span.clone()).await {
        Ok(value) => {
            span.in_scope(|| tracing::info!("generateLevels succeeded"));
            JsonRpcResponse::success(
                req.response_id(),
                serde_json::json!({
                    "content": [{
                        "type": "text",
                        "text": serde_json::to_string_pretty(&value).unwrap_or_default()
                    }],
                    "structuredContent": value,
                    "isError": false
                }),
            )
        }
        Err(err) => {
            span.in_scope(|| tracing::info!(kind = err.kind(), "generateLevels failed"));
            JsonRpcResponse::error_with_data(
                req.response_id(),
                INTERNAL_ERROR,
                err.to_string(),
                Some(serde_json::json!({ "kind": err.kind() })),
            )
        }
    }
}
