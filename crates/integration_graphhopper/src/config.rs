//! GraphHopper service configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the GraphHopper geocoding and routing endpoints
#[derive(Clone, Serialize, Deserialize)]
pub struct GraphHopperConfig {
    /// Base URL of the GraphHopper API (endpoints `/geocode` and `/route` are appended)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` parameter (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Locale for place names and instruction texts
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Geocoding request timeout in seconds
    #[serde(default = "default_geocode_timeout_secs")]
    pub geocode_timeout_secs: u64,

    /// Routing request timeout in seconds; route computation is slower than lookups
    #[serde(default = "default_route_timeout_secs")]
    pub route_timeout_secs: u64,
}

impl std::fmt::Debug for GraphHopperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphHopperConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("locale", &self.locale)
            .field("geocode_timeout_secs", &self.geocode_timeout_secs)
            .field("route_timeout_secs", &self.route_timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://graphhopper.com/api/1".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

const fn default_geocode_timeout_secs() -> u64 {
    30
}

const fn default_route_timeout_secs() -> u64 {
    45
}

impl Default for GraphHopperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            locale: default_locale(),
            geocode_timeout_secs: default_geocode_timeout_secs(),
            route_timeout_secs: default_route_timeout_secs(),
        }
    }
}

impl GraphHopperConfig {
    /// Default configuration with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            geocode_timeout_secs: 5,
            route_timeout_secs: 5,
            ..Self::with_api_key("test-key")
        }
    }

    /// The API key, if one is configured and non-blank
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.trim().is_empty())
    }

    /// Full URL of an endpoint below the base URL
    #[must_use]
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

        if self.api_key().is_none() {
            return Err("api_key must be set".to_string());
        }

        if self.locale.trim().is_empty() {
            return Err("locale must not be empty".to_string());
        }

        if self.geocode_timeout_secs == 0 || self.route_timeout_secs == 0 {
            return Err("timeouts must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphHopperConfig::default();
        assert_eq!(config.base_url, "https://graphhopper.com/api/1");
        assert_eq!(config.locale, "en");
        assert_eq!(config.geocode_timeout_secs, 30);
        assert_eq!(config.route_timeout_secs, 45);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_routing_waits_longer_than_geocoding() {
        let config = GraphHopperConfig::default();
        assert!(config.route_timeout_secs > config.geocode_timeout_secs);
    }

    #[test]
    fn test_testing_config() {
        let config = GraphHopperConfig::for_testing();
        assert_eq!(config.api_key(), Some("test-key"));
        assert_eq!(config.geocode_timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = GraphHopperConfig {
            base_url: "http://localhost:8989/".to_string(),
            ..GraphHopperConfig::for_testing()
        };
        assert_eq!(config.endpoint("route"), "http://localhost:8989/route");
    }

    #[test]
    fn test_validation_missing_api_key() {
        assert!(GraphHopperConfig::default().validate().is_err());
        assert!(GraphHopperConfig::with_api_key("  ").validate().is_err());
    }

    #[test]
    fn test_validation_bad_base_url() {
        let config = GraphHopperConfig {
            base_url: "not a url".to_string(),
            ..GraphHopperConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = GraphHopperConfig {
            route_timeout_secs: 0,
            ..GraphHopperConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GraphHopperConfig::with_api_key("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_serialization_skips_api_key() {
        let config = GraphHopperConfig::with_api_key("super-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));

        let deserialized: GraphHopperConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert!(deserialized.api_key().is_none());
    }
}
