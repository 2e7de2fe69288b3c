//! Integration configurations: Weather

use domain::{DomainError, TemperatureUnit};
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use super::default_true;

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// Allow destination weather lookups
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Open-Meteo API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// Default unit system: "metric" or "imperial"
    #[serde(default = "default_weather_unit")]
    pub unit: String,
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_weather_timeout() -> u64 {
    30
}

fn default_weather_unit() -> String {
    "metric".to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
            unit: default_weather_unit(),
        }
    }
}

impl WeatherAppConfig {
    /// The configured default temperature unit
    pub fn default_unit(&self) -> Result<TemperatureUnit, DomainError> {
        self.unit.parse()
    }

    /// Client configuration for the Open-Meteo client
    #[must_use]
    pub fn client_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        self.default_unit().map_err(|e| e.to_string())?;
        Ok(())
    }
}
