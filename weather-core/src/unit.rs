use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Temperature unit governing every rendered temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl DisplayUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Celsius => "celsius",
            DisplayUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Single-letter suffix shown after the degree sign.
    pub fn symbol(&self) -> char {
        match self {
            DisplayUnit::Celsius => 'C',
            DisplayUnit::Fahrenheit => 'F',
        }
    }

    /// Picks the value matching this unit out of a `(celsius, fahrenheit)` pair.
    pub fn pick(&self, celsius: f64, fahrenheit: f64) -> f64 {
        match self {
            DisplayUnit::Celsius => celsius,
            DisplayUnit::Fahrenheit => fahrenheit,
        }
    }

    pub const fn all() -> &'static [DisplayUnit] {
        &[DisplayUnit::Celsius, DisplayUnit::Fahrenheit]
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown unit '{0}'. Supported units: c, f, celsius, fahrenheit.")]
pub struct UnknownUnit(pub String);

impl FromStr for DisplayUnit {
    type Err = UnknownUnit;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "c" | "celsius" => Ok(DisplayUnit::Celsius),
            "f" | "fahrenheit" => Ok(DisplayUnit::Fahrenheit),
            _ => Err(UnknownUnit(value.to_string())),
        }
    }
}
