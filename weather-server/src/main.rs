//! Standalone binary for the weather proxy server.

use weather_core::{Config, provider_from_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    weather_server::init_tracing("info");

    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    weather_server::serve(&config.server, provider).await
}
