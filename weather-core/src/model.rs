use serde::{Deserialize, Serialize};

/// The last successfully fetched forecast payload.
///
/// Field names follow the WeatherAPI.com `forecast.json` schema, so the same
/// type is decoded from the upstream provider, relayed by the proxy endpoint
/// and decoded again by the view controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: Current,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// Provider local time, `"YYYY-MM-DD HH:MM"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localtime: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub humidity: u8,
    pub wind_kph: f64,
    pub pressure_mb: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Usually protocol-relative (`//cdn.weatherapi.com/...`).
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// `YYYY-MM-DD`
    pub date: String,
    pub day: Day,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avgtemp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avgtemp_f: Option<f64>,
    pub condition: Condition,
}
