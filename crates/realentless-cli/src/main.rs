use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use realentless_relay::DEFAULT_BACKEND_URL;

mod backend_cmd;
mod gateway_cmd;
mod sample;

#[derive(Parser)]
#[command(name = "realentless", about = "Realentless CLI - exercise the generateLevels gateway")]
struct Cli {
    /// Gateway URL (the realentless-mcp server in http mode)
    #[arg(long, env = "REALENTLESS_GATEWAY_URL", default_value = "http://localhost:3000")]
    gateway_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tools exposed by the gateway
    Tools,

    /// Call generateLevels through the gateway and print the result
    Call {
        /// JSON file with `userId`, `levels` and `exercises` (defaults to the built-in sample)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Call the backend directly, bypassing the gateway
    Backend {
        /// JSON file with `userId`, `levels` and `exercises` (defaults to the built-in sample)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Backend JSON-RPC endpoint
        #[arg(long, env = "REALENTLESS_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
        backend_url: String,
    },

    /// Print the built-in sample arguments
    Sample,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tools => gateway_cmd::list_tools(&cli.gateway_url).await?,
        Commands::Call { file } => {
            let arguments = sample::load(file.as_deref())?;
            gateway_cmd::call(&cli.gateway_url, arguments).await?;
        }
        Commands::Backend { file, backend_url } => {
            let arguments = sample::load(file.as_deref())?;
            backend_cmd::run(&backend_url, arguments).await?;
        }
        Commands::Sample => {
            println!("{}", serde_json::to_string_pretty(&sample::arguments())?);
        }
    }

    Ok(())
}
