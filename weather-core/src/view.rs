//! Structured view model produced from a snapshot and a display unit.
//!
//! Nothing here touches the network or any mutable state: [`render_view`] is
//! a pure function, and front-ends only bind its output to widgets or text.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::{
    model::{Condition, ForecastDay, WeatherSnapshot},
    unit::DisplayUnit,
};

/// Everything the current-conditions and forecast panels display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherViewModel {
    pub unit: DisplayUnit,
    pub current: CurrentPanel,
    pub forecast: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentPanel {
    /// `"London, United Kingdom"`
    pub location: String,
    /// Long local date, e.g. `"Monday, January 15, 2024"`.
    pub date: Option<String>,
    /// `"22°C"`
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
    pub condition: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastCard {
    /// Weekday abbreviation, e.g. `"Tue"`.
    pub weekday: String,
    pub condition: String,
    pub icon_url: String,
    /// Day average with unit, e.g. `"14°C"`; absent when the provider omits it.
    pub average: Option<String>,
    /// `"18°"`
    pub max: String,
    pub min: String,
}

/// Builds the view model for `snapshot` in `unit`.
///
/// The first forecast day is today and is already covered by the
/// current-conditions panel, so it never gets a card.
pub fn render_view(snapshot: &WeatherSnapshot, unit: DisplayUnit) -> WeatherViewModel {
    let current = &snapshot.current;

    let panel = CurrentPanel {
        location: format!("{}, {}", snapshot.location.name, snapshot.location.country),
        date: snapshot.location.localtime.as_deref().and_then(long_date),
        temperature: degrees_with_unit(unit.pick(current.temp_c, current.temp_f), unit),
        feels_like: degrees_with_unit(unit.pick(current.feelslike_c, current.feelslike_f), unit),
        humidity: format!("{}%", current.humidity),
        wind: format!("{} km/h", current.wind_kph),
        pressure: format!("{} mb", current.pressure_mb),
        condition: current.condition.text.clone(),
        icon_url: icon_url(&current.condition),
    };

    let forecast = snapshot
        .forecast
        .forecastday
        .iter()
        .skip(1)
        .map(|day| forecast_card(day, unit))
        .collect();

    WeatherViewModel { unit, current: panel, forecast }
}

fn forecast_card(entry: &ForecastDay, unit: DisplayUnit) -> ForecastCard {
    let day = &entry.day;
    let average = match unit {
        DisplayUnit::Celsius => day.avgtemp_c,
        DisplayUnit::Fahrenheit => day.avgtemp_f,
    };

    ForecastCard {
        weekday: weekday_abbrev(&entry.date),
        condition: day.condition.text.clone(),
        icon_url: icon_url(&day.condition),
        average: average.map(|t| degrees_with_unit(t, unit)),
        max: degrees(unit.pick(day.maxtemp_c, day.maxtemp_f)),
        min: degrees(unit.pick(day.mintemp_c, day.mintemp_f)),
    }
}

/// Makes a provider icon reference usable as an image URL.
pub fn icon_url(condition: &Condition) -> String {
    let icon = condition.icon.as_str();
    if icon.starts_with("http://") || icon.starts_with("https://") {
        icon.to_string()
    } else if icon.starts_with("//") {
        format!("https:{icon}")
    } else {
        format!("https://{}", icon.trim_start_matches('/'))
    }
}

/// Rounds half away from zero.
fn round_temp(value: f64) -> i64 {
    value.round() as i64
}

fn degrees(value: f64) -> String {
    format!("{}°", round_temp(value))
}

fn degrees_with_unit(value: f64, unit: DisplayUnit) -> String {
    format!("{}°{}", round_temp(value), unit.symbol())
}

fn weekday_abbrev(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn long_date(localtime: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(localtime, "%Y-%m-%d %H:%M")
        .ok()
        .map(|dt| dt.format("%A, %B %-d, %Y").to_string())
}
