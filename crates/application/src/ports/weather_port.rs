//! Weather service port
//!
//! Defines the interface for destination weather lookups.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Coordinate, TemperatureUnit};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current weather at a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationWeather {
    /// Temperature in `unit`
    pub temperature: f64,
    /// Unit of `temperature`
    pub unit: TemperatureUnit,
    /// Condition description, e.g. "Overcast"
    pub condition: Option<String>,
    /// Wind speed in km/h, when reported
    pub wind_speed_kmh: Option<f64>,
    /// Observation time, when reported
    pub observed_at: Option<DateTime<Utc>>,
}

impl DestinationWeather {
    /// Format as a one-line status, e.g. `31.2 °C, Overcast`
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.condition {
            Some(condition) => format!("{:.1} {}, {condition}", self.temperature, self.unit),
            None => format!("{:.1} {}", self.temperature, self.unit),
        }
    }

    /// Wind and observation time, e.g. `wind 9.0 km/h, observed 14:00 UTC`
    ///
    /// `None` when the service reported neither.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.wind_speed_kmh.map(|speed| format!("wind {speed:.1} km/h")),
            self.observed_at
                .map(|at| format!("observed {}", at.format("%Y-%m-%d %H:%M UTC"))),
        ]
        .into_iter()
        .flatten()
        .collect();

        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the current weather at a location
    async fn current_weather(
        &self,
        location: Coordinate,
        unit: TemperatureUnit,
    ) -> Result<DestinationWeather, ApplicationError>;
}
