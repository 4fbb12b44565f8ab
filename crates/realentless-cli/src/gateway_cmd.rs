use reqwest::Client;
use serde_json::Value;

use realentless_mcp::{JsonRpcRequest, JsonRpcResponse, GENERATE_LEVELS};

/// POST one JSON-RPC request to the gateway's `/mcp` endpoint.
async fn rpc(gateway_url: &str, method: &str, params: Value) -> anyhow::Result<JsonRpcResponse> {
    let client = Client::new();
    let request = JsonRpcRequest::new(Value::from(1), method, params);

    let resp = client
        .post(format!("{gateway_url}/mcp"))
        .json(&request)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await?;
        anyhow::bail!("Gateway returned {status}: {body}");
    }

    Ok(resp.json::<JsonRpcResponse>().await?)
}

/// Print a successful result; a JSON-RPC error becomes the command's error so
/// the process exits non-zero.
fn print_response(resp: &JsonRpcResponse) -> anyhow::Result<()> {
    if let Some(error) = &resp.error {
        anyhow::bail!("Gateway error {}: {}", error.code, error.message);
    }
    let result = resp.result.as_ref().unwrap_or(&Value::Null);
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// List the tools the gateway exposes.
pub async fn list_tools(gateway_url: &str) -> anyhow::Result<()> {
    let resp = rpc(gateway_url, "tools/list", serde_json::json!({})).await?;

    match resp.result.as_ref().and_then(|r| r.get("tools")).and_then(Value::as_array) {
        Some(tools) => {
            for tool in tools {
                println!(
                    "{}: {}",
                    tool["name"].as_str().unwrap_or_default(),
                    tool["description"].as_str().unwrap_or_default()
                );
            }
            Ok(())
        }
        None => print_response(&resp),
    }
}

/// Invoke `generateLevels` through the gateway and print the outcome.
pub async fn call(gateway_url: &str, arguments: Value) -> anyhow::Result<()> {
    let resp = rpc(
        gateway_url,
        "tools/call",
        serde_json::json!({
            "name": GENERATE_LEVELS,
            "arguments": arguments,
        }),
    )
    .await?;

    tracing::info!("Gateway answered generateLevels");
    print_response(&resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn call_fails_when_gateway_reports_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mcp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {
                    "code": -32603,
                    "message": "HTTP error 500: internal error",
                    "data": {"kind": "http_status"}
                }
            })))
            .mount(&server)
            .await;

        let err = call(&server.uri(), json!({"userId": "u1", "levels": [], "exercises": []}))
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("-32603"));
        assert!(msg.contains("HTTP error 500: internal error"));
    }

    #[tokio::test]
    async fn call_succeeds_on_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mcp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {"structuredContent": {"created": 0}, "isError": false}
            })))
            .mount(&server)
            .await;

        call(&server.uri(), json!({"userId": "u1", "levels": [], "exercises": []}))
            .await
            .unwrap();
    }
}
