//! Core library for the weather widget.
//!
//! This crate defines:
//! - Configuration loading (file + environment)
//! - The forecast snapshot model shared by proxy and front-ends
//! - The view controller and the pure view-model renderer it drives
//! - HTTP clients for the proxy endpoint and the upstream provider
//!
//! It is used by `weather-server` and `weather-cli`.

pub mod client;
pub mod config;
pub mod controller;
pub mod geolocation;
pub mod model;
pub mod provider;
pub mod unit;
pub mod view;

pub use client::{FetchError, ProxyClient, WeatherSource};
pub use config::{ClientConfig, Config, ServerConfig, UpstreamConfig};
pub use controller::{FetchTicket, UiEvent, ViewController, WeatherView};
pub use geolocation::{Coordinates, FixedGeolocator, GeolocationError, Geolocator};
pub use model::WeatherSnapshot;
pub use provider::{WeatherProvider, provider_from_config};
pub use unit::DisplayUnit;
pub use view::{CurrentPanel, ForecastCard, WeatherViewModel, render_view};
