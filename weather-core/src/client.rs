use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::WeatherSnapshot;

/// Shown when a failure carries no message of its own.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch weather data";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to weather proxy failed: {0}")]
    Transport(String),

    #[error("Weather proxy returned status {status}: {}", message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse weather data: {0}")]
    Parse(String),
}

impl FetchError {
    /// Text suitable for the error panel.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Status { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }
}

/// Where the view controller gets its snapshots from.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, query: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// HTTP client for the proxy's `GET /api/weather?location=` route.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/weather", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherSource for ProxyClient {
    async fn fetch(&self, query: &str) -> Result<WeatherSnapshot, FetchError> {
        debug!(location = query, "requesting weather from proxy");

        let res = self
            .http
            .get(self.endpoint())
            .query(&[("location", query)])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body).ok().map(|b| b.error);
            return Err(FetchError::Status { status: status.as_u16(), message });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_server_message() {
        let err = FetchError::Status { status: 400, message: Some("Location is required".into()) };
        assert_eq!(err.user_message(), "Location is required");
    }

    #[test]
    fn other_errors_use_generic_message() {
        let blank = FetchError::Status { status: 500, message: Some("  ".into()) };
        assert_eq!(blank.user_message(), GENERIC_FETCH_ERROR);
        assert_eq!(FetchError::Transport("refused".into()).user_message(), GENERIC_FETCH_ERROR);
        assert_eq!(FetchError::Parse("eof".into()).user_message(), GENERIC_FETCH_ERROR);
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        assert_eq!(ProxyClient::new("http://localhost:3000/").endpoint(), "http://localhost:3000/api/weather");
    }
}
