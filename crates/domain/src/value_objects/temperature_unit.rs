//! Temperature unit value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Unit system for reported temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius ("metric")
    #[default]
    Celsius,
    /// Degrees Fahrenheit ("imperial")
    Fahrenheit,
}

impl TemperatureUnit {
    /// Value of the Open-Meteo `temperature_unit` parameter
    #[must_use]
    pub const fn as_query_value(&self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    /// Display symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "celsius" | "c" => Ok(Self::Celsius),
            "imperial" | "fahrenheit" | "f" => Ok(Self::Fahrenheit),
            other => Err(DomainError::InvalidTemperatureUnit(other.to_string())),
        }
    }
}
