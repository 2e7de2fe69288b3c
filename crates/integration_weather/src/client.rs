//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo forecast endpoint's `current_weather` block.

use async_trait::async_trait;
use domain::{Coordinate, TemperatureUnit};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentWeather};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Weather API error: connection failed: {0}")]
    ConnectionFailed(String),

    /// The weather service answered with a non-success status
    #[error("Weather API error: {0}")]
    RequestFailed(String),

    /// Request timeout
    #[error("Weather API error: request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Failed to parse response from weather service
    #[error("Weather API error: invalid response: {0}")]
    ParseError(String),

    /// The response carried no current weather block
    #[error("No weather data available.")]
    NoData,

    /// Rate limit exceeded
    #[error("Weather API error: rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the current weather at a location in the requested unit
    async fn current_weather(
        &self,
        location: Coordinate,
        unit: TemperatureUnit,
    ) -> Result<CurrentWeather, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Query parameters for a current-weather request
    fn query_params(location: Coordinate, unit: TemperatureUnit) -> [(&'static str, String); 4] {
        [
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("current_weather", "true".to_string()),
            ("temperature_unit", unit.as_query_value().to_string()),
        ]
    }

    /// Parse a forecast response body
    fn parse_response(body: &str, unit: TemperatureUnit) -> Result<CurrentWeather, WeatherError> {
        let api_response: ApiResponse =
            serde_json::from_str(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

        api_response
            .current_weather
            .map(|raw| raw.into_current(unit))
            .ok_or(WeatherError::NoData)
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %location.latitude(), lon = %location.longitude()))]
    async fn current_weather(
        &self,
        location: Coordinate,
        unit: TemperatureUnit,
    ) -> Result<CurrentWeather, WeatherError> {
        let url = format!("{}/forecast", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&Self::query_params(location, unit))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    WeatherError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(status.as_u16().to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Self::parse_response(&body, unit)
    }
}
