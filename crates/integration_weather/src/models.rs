//! Weather data models

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use domain::TemperatureUnit;
use serde::{Deserialize, Serialize};

/// Weather condition derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    ClearSky,
    /// Mainly clear (WMO 1)
    MainlyClear,
    /// Partly cloudy (WMO 2)
    PartlyCloudy,
    /// Overcast (WMO 3)
    Overcast,
    /// Fog (WMO 45, 48)
    Fog,
    /// Drizzle (WMO 51-57)
    Drizzle,
    /// Rain (WMO 61-67, 80-82)
    Rain,
    /// Snow (WMO 71-77, 85, 86)
    Snow,
    /// Thunderstorm (WMO 95-99)
    Thunderstorm,
    /// Unknown condition
    Unknown,
}

impl WeatherCondition {
    /// Convert WMO weather code to `WeatherCondition`
    ///
    /// See: <https://open-meteo.com/en/docs> for WMO code reference
    #[must_use]
    pub const fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51..=57 => Self::Drizzle,
            61..=67 | 80..=82 => Self::Rain,
            71..=77 | 85 | 86 => Self::Snow,
            95..=99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description of the weather condition
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Current weather at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in `unit`
    pub temperature: f64,
    /// Unit of `temperature`
    pub unit: TemperatureUnit,
    /// Wind speed in km/h, when reported
    pub wind_speed: Option<f64>,
    /// Weather condition
    pub condition: WeatherCondition,
    /// Observation time, when reported in a recognized format
    pub observed_at: Option<DateTime<Utc>>,
}

/// Raw Open-Meteo forecast response
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub current_weather: Option<RawCurrentWeather>,
}

/// Raw `current_weather` block
#[derive(Debug, Deserialize)]
pub(crate) struct RawCurrentWeather {
    pub temperature: f64,
    pub windspeed: Option<f64>,
    pub weathercode: Option<u8>,
    pub time: Option<String>,
}

impl RawCurrentWeather {
    /// Convert into the public model for the requested unit
    pub fn into_current(self, unit: TemperatureUnit) -> CurrentWeather {
        CurrentWeather {
            temperature: self.temperature,
            unit,
            wind_speed: self.windspeed,
            condition: self
                .weathercode
                .map_or(WeatherCondition::Unknown, WeatherCondition::from_wmo_code),
            observed_at: self.time.as_deref().and_then(parse_datetime),
        }
    }
}

/// Parse the API's local ISO 8601 timestamps (`2026-02-05T14:00`)
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| Utc.from_utc_datetime(&dt))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_codes() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_wmo_code(3), WeatherCondition::Overcast);
        assert_eq!(WeatherCondition::from_wmo_code(48), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_wmo_code(63), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(81), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(86), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_wmo_code(96), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_wmo_code(42), WeatherCondition::Unknown);
    }

    #[test]
    fn test_raw_conversion() {
        let json = r#"{
            "temperature": 31.2,
            "windspeed": 10.3,
            "winddirection": 200,
            "weathercode": 3,
            "is_day": 1,
            "time": "2026-02-05T14:00"
        }"#;
        let raw: RawCurrentWeather = serde_json::from_str(json).unwrap();
        let current = raw.into_current(TemperatureUnit::Celsius);
        assert!((current.temperature - 31.2).abs() < f64::EPSILON);
        assert_eq!(current.condition, WeatherCondition::Overcast);
        assert_eq!(current.wind_speed, Some(10.3));
        assert_eq!(
            current.observed_at.unwrap().to_rfc3339(),
            "2026-02-05T14:00:00+00:00"
        );
    }

    #[test]
    fn test_minimal_raw_conversion() {
        let raw: RawCurrentWeather = serde_json::from_str(r#"{"temperature": 88.0}"#).unwrap();
        let current = raw.into_current(TemperatureUnit::Fahrenheit);
        assert_eq!(current.condition, WeatherCondition::Unknown);
        assert!(current.observed_at.is_none());
        assert!(current.wind_speed.is_none());
        assert_eq!(current.unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert!(parse_datetime("2026-02-05T14:00").is_some());
        assert!(parse_datetime("2026-02-05T14:00:30").is_some());
        assert!(parse_datetime("2026-02-05T14:00:00+01:00").is_some());
        assert!(parse_datetime("yesterday").is_none());
    }

    #[test]
    fn test_response_without_current_weather() {
        let raw: ApiResponse = serde_json::from_str(r#"{"latitude": 1.0}"#).unwrap();
        assert!(raw.current_weather.is_none());
    }
}
