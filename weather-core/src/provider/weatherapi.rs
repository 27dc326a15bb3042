use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::WeatherSnapshot;

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_FORECAST_DAYS: u8 = 5;

/// WeatherAPI.com `forecast.json` client.
#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    forecast_days: u8,
    http: Client,
}

impl std::fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("base_url", &self.base_url)
            .field("forecast_days", &self.forecast_days)
            .finish_non_exhaustive()
    }
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            forecast_days: DEFAULT_FORECAST_DAYS,
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Clamped to the provider's 1..=14 range.
    pub fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days.clamp(1, 14);
        self
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn forecast(&self, location: &str) -> Result<serde_json::Value> {
        let url = format!("{}/forecast.json", self.base_url.trim_end_matches('/'));
        let days = self.forecast_days.to_string();

        debug!(location, days = self.forecast_days, "requesting WeatherAPI forecast");

        let res = self
            .http
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com (forecast)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read WeatherAPI forecast response body")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "WeatherAPI forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).context("Failed to parse WeatherAPI forecast JSON")?;
        WeatherSnapshot::deserialize(&value)
            .context("WeatherAPI forecast JSON does not match the forecast schema")?;

        Ok(value)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("{\"error\":1}"), "{\"error\":1}");
    }

    #[test]
    fn truncate_cuts_long_bodies_on_char_boundaries() {
        let body = "é".repeat(300);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
    }

    #[test]
    fn forecast_days_are_clamped() {
        let p = WeatherApiProvider::new("k".into()).with_forecast_days(0);
        assert_eq!(p.forecast_days, 1);
        let p = p.with_forecast_days(30);
        assert_eq!(p.forecast_days, 14);
    }

    #[test]
    fn debug_output_hides_api_key() {
        let p = WeatherApiProvider::new("SECRET".into());
        assert!(!format!("{p:?}").contains("SECRET"));
    }
}
