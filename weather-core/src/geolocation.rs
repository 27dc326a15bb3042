use std::fmt::{self, Debug};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// The `"lat,lon"` form accepted by the proxy's `location` parameter.
    pub fn to_query(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = GeolocationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || GeolocationError::Other(format!("invalid coordinates '{value}'"));

        let (lat, lon) = value.split_once(',').ok_or_else(invalid)?;
        let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid());
        }

        Ok(Self { latitude, longitude })
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeolocationError {
    #[error("Permission to read the position was denied")]
    Denied,

    #[error("Position is unavailable")]
    Unavailable,

    #[error("Timed out waiting for a position")]
    Timeout,

    #[error("Geolocation failed: {0}")]
    Other(String),
}

/// Single-shot position lookup provided by the host environment.
#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Geolocator that always answers with the same coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    position: Coordinates,
}

impl FixedGeolocator {
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.position)
    }
}
