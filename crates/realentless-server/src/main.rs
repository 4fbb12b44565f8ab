use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use realentless_relay::{HttpRelay, RelayConfig, DEFAULT_BACKEND_URL};
use realentless_server::app_state::AppState;
use realentless_server::{router, stdio};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
    /// Streamable HTTP on `POST /mcp`
    Http,
}

#[derive(Parser)]
#[command(
    name = "realentless-mcp",
    about = "MCP gateway exposing the generateLevels tool of the Realentless backend"
)]
struct Cli {
    /// How MCP clients reach this server
    #[arg(long, value_enum, env = "MCP_TRANSPORT", default_value = "stdio")]
    transport: Transport,

    /// Bind host (http transport only)
    #[arg(long, env = "REALENTLESS_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Bind port (http transport only)
    #[arg(long, env = "REALENTLESS_PORT", default_value_t = 3000)]
    port: u16,

    /// JSON-RPC endpoint that performs level generation
    #[arg(long, env = "REALENTLESS_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Timeout for one backend round trip, in seconds
    #[arg(long, env = "REALENTLESS_BACKEND_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the stdio transport, so logs always go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = RelayConfig::new(cli.backend_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    tracing::info!(
        "Relaying generateLevels to {} (timeout {:?})",
        config.url,
        config.timeout
    );

    let relay = HttpRelay::new(config)?;
    let state = AppState::new(Arc::new(relay));

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Realentless MCP serving on stdio");
            stdio::run_stdio(state).await?;
        }
        Transport::Http => {
            let app = router::create_router(state);

            let addr = format!("{}:{}", cli.host, cli.port);
            tracing::info!("Realentless MCP listening on {addr}");

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
