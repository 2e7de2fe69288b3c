//! GraphHopper geocoding client
//!
//! Converts free-text place names to coordinates using the GraphHopper
//! `/geocode` endpoint. One request per call; no caching and no retries.

use async_trait::async_trait;
use domain::GeocodedPlace;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::GraphHopperConfig;
use crate::error::GraphHopperError;
use crate::http;
use crate::models::RawGeocodeResponse;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a place name to the coordinates of its first hit
    async fn geocode(&self, location: &str) -> Result<GeocodedPlace, GraphHopperError>;
}

/// GraphHopper-based geocoding client
#[derive(Debug)]
pub struct GraphHopperGeocodingClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperGeocodingClient {
    /// Create a new GraphHopper geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client cannot be initialized.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, GraphHopperError> {
        if config.api_key().is_none() {
            return Err(GraphHopperError::ConfigurationError(
                "GraphHopper API key is not set".to_string(),
            ));
        }

        Ok(Self {
            client: http::build_client(config.geocode_timeout_secs)?,
            config: config.clone(),
        })
    }

    /// Query parameters for a lookup of `location`
    fn query_params(&self, location: &str) -> Vec<(&'static str, String)> {
        vec![
            ("q", location.to_string()),
            ("locale", self.config.locale.clone()),
            ("limit", "1".to_string()),
            ("key", self.config.api_key().unwrap_or_default().to_string()),
        ]
    }

    /// Parse a geocoding response body, taking the first hit
    fn parse_response(body: &str, location: &str) -> Result<GeocodedPlace, GraphHopperError> {
        let raw: RawGeocodeResponse =
            serde_json::from_str(body).map_err(|e| GraphHopperError::ParseError(e.to_string()))?;

        raw.hits
            .into_iter()
            .next()
            .ok_or_else(|| GraphHopperError::LocationNotFound(location.to_string()))?
            .into_place(location)
    }
}

#[async_trait]
impl GeocodingClient for GraphHopperGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, location: &str) -> Result<GeocodedPlace, GraphHopperError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(GraphHopperError::EmptyLocation);
        }

        let url = self.config.endpoint("geocode");
        debug!(%location, "Geocoding location");

        let body = http::get_body(
            &self.client,
            &url,
            &self.query_params(location),
            self.config.geocode_timeout_secs,
        )
        .await?;

        let place = Self::parse_response(&body, location)?;
        debug!(%location, coordinate = %place.coordinate, "Geocoded location");
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let result = GraphHopperGeocodingClient::new(&GraphHopperConfig::default());
        assert!(matches!(
            result,
            Err(GraphHopperError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_query_params() {
        let client = GraphHopperGeocodingClient::new(&GraphHopperConfig::for_testing()).unwrap();
        let params = client.query_params("Manila");
        assert!(params.contains(&("q", "Manila".to_string())));
        assert!(params.contains(&("locale", "en".to_string())));
        assert!(params.contains(&("limit", "1".to_string())));
        assert!(params.contains(&("key", "test-key".to_string())));
    }

    #[test]
    fn test_parse_first_hit() {
        let json = r#"{"hits": [
            {"point": {"lat": 14.59, "lng": 120.98}, "name": "Manila"},
            {"point": {"lat": 10.0, "lng": 10.0}, "name": "Elsewhere"}
        ]}"#;
        let place = GraphHopperGeocodingClient::parse_response(json, "Manila").unwrap();
        assert_eq!(place.name.as_deref(), Some("Manila"));
    }

    #[test]
    fn test_parse_no_hits() {
        let result = GraphHopperGeocodingClient::parse_response(r#"{"hits": []}"#, "Atlantis");
        assert!(matches!(
            result,
            Err(GraphHopperError::LocationNotFound(name)) if name == "Atlantis"
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = GraphHopperGeocodingClient::parse_response("not json", "Manila");
        assert!(matches!(result, Err(GraphHopperError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_blank_location_fails_fast() {
        // Unroutable base URL: any request would fail with a connection error
        let config = GraphHopperConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..GraphHopperConfig::for_testing()
        };
        let client = GraphHopperGeocodingClient::new(&config).unwrap();
        let err = client.geocode("   ").await.unwrap_err();
        assert!(matches!(err, GraphHopperError::EmptyLocation));
        assert!(err.to_string().to_lowercase().contains("cannot be empty"));
    }
}
