use serde_json::Value;

use realentless_core::{GenerateLevelsParams, LevelsBackend};
use realentless_relay::{HttpRelay, RelayConfig};

/// Run the relay directly against the backend, bypassing the gateway.
pub async fn run(backend_url: &str, arguments: Value) -> anyhow::Result<()> {
    let params: GenerateLevelsParams = serde_json::from_value(arguments)?;
    let relay = HttpRelay::new(RelayConfig::new(backend_url))?;

    let envelope = HttpRelay::envelope(&params)?;
    tracing::info!("Envelope: {}", serde_json::to_string(&envelope)?);

    let result = relay.generate_levels(params).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
