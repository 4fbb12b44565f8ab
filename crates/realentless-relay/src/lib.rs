pub mod config;
pub mod http;

pub use config::{RelayConfig, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT};
pub use http::{HttpRelay, BACKEND_REQUEST_ID};
