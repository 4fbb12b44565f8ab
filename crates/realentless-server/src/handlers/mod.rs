mod health;
mod mcp;

pub use health::health;
pub use mcp::mcp_request;
