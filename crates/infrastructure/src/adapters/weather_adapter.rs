//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{DestinationWeather, WeatherPort};
use async_trait::async_trait;
use domain::{Coordinate, TemperatureUnit};
use integration_weather::{
    CurrentWeather, OpenMeteoClient, WeatherClient, WeatherCondition, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using Open-Meteo API
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around any weather client
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        ApplicationError::ExternalService(err.to_string())
    }

    /// Convert integration current weather to application weather
    fn map_current(current: CurrentWeather) -> DestinationWeather {
        DestinationWeather {
            temperature: current.temperature,
            unit: current.unit,
            condition: (current.condition != WeatherCondition::Unknown)
                .then(|| current.condition.description().to_string()),
            wind_speed_kmh: current.wind_speed,
            observed_at: current.observed_at,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_weather(
        &self,
        location: Coordinate,
        unit: TemperatureUnit,
    ) -> Result<DestinationWeather, ApplicationError> {
        let result = self
            .client
            .current_weather(location, unit)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    condition = %current.condition,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(Self::map_current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubWeather(fn(TemperatureUnit) -> Result<CurrentWeather, WeatherError>);

    #[async_trait]
    impl WeatherClient for StubWeather {
        async fn current_weather(
            &self,
            _location: Coordinate,
            unit: TemperatureUnit,
        ) -> Result<CurrentWeather, WeatherError> {
            (self.0)(unit)
        }
    }

    fn adapter(f: fn(TemperatureUnit) -> Result<CurrentWeather, WeatherError>) -> WeatherAdapter {
        WeatherAdapter::with_client(Arc::new(StubWeather(f)))
    }

    fn here() -> Coordinate {
        Coordinate::new_unchecked(14.676, 121.0437)
    }

    #[tokio::test]
    async fn maps_current_weather() {
        let weather = adapter(|unit| {
            Ok(CurrentWeather {
                temperature: 88.5,
                unit,
                wind_speed: Some(12.0),
                condition: WeatherCondition::Overcast,
                observed_at: None,
            })
        })
        .current_weather(here(), TemperatureUnit::Fahrenheit)
        .await
        .unwrap();

        assert_eq!(weather.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(weather.summary(), "88.5 °F, Overcast");
        assert_eq!(weather.wind_speed_kmh, Some(12.0));
        assert_eq!(weather.details().as_deref(), Some("wind 12.0 km/h"));
    }

    #[tokio::test]
    async fn unknown_condition_is_omitted() {
        let weather = adapter(|unit| {
            Ok(CurrentWeather {
                temperature: 20.0,
                unit,
                wind_speed: None,
                condition: WeatherCondition::Unknown,
                observed_at: None,
            })
        })
        .current_weather(here(), TemperatureUnit::Celsius)
        .await
        .unwrap();

        assert_eq!(weather.condition, None);
    }

    #[tokio::test]
    async fn errors_keep_their_message() {
        let err = adapter(|_| Err(WeatherError::NoData))
            .current_weather(here(), TemperatureUnit::Celsius)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No weather data available.");

        let err = adapter(|_| Err(WeatherError::RequestFailed("503".to_string())))
            .current_weather(here(), TemperatureUnit::Celsius)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Weather API error: 503");
    }

    #[test]
    fn debug_impl() {
        let adapter = WeatherAdapter::new(WeatherConfig::default()).unwrap();
        assert!(format!("{adapter:?}").contains("WeatherAdapter"));
    }
}
