//! `GET /api/weather?location=`

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
}

pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let location = query
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Location is required".to_string()))?;

    debug!(location, "proxying weather request");

    let body = state.provider.forecast(location).await.map_err(|e| {
        error!(location, error = %format!("{e:#}"), "Error fetching weather data");
        ApiError::Upstream(e.to_string())
    })?;

    Ok(Json(body))
}
