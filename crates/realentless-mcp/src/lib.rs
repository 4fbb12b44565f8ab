pub mod jsonrpc;
pub mod tools;

pub use jsonrpc::{JsonRpcError, JsonRpcOutcome, JsonRpcRequest, JsonRpcResponse};
pub use tools::{ToolDefinition, ToolRegistry, GENERATE_LEVELS};

/// MCP protocol revision announced during `initialize`.
pub const PROTOCOL_VERSION: &str = "2025-03-26";
