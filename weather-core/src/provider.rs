use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;

use crate::{config::Config, provider::weatherapi::WeatherApiProvider};

pub mod weatherapi;

/// Upstream forecast source used by the proxy endpoint.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// The upstream JSON body, unchanged. Implementations only return bodies
    /// that decode as a [`WeatherSnapshot`](crate::model::WeatherSnapshot).
    async fn forecast(&self, location: &str) -> anyhow::Result<serde_json::Value>;
}

/// Construct the upstream provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = config.upstream_api_key()?;

    let provider = WeatherApiProvider::new(api_key.to_owned())
        .with_base_url(config.upstream.base_url.clone())
        .with_forecast_days(config.upstream.forecast_days);

    Ok(Arc::new(provider))
}
