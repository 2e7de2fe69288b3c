//! Geocoding adapter - Implements GeocodingPort using integration_graphhopper

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::GeocodedPlace;
use integration_graphhopper::{
    GeocodingClient, GraphHopperConfig, GraphHopperError, GraphHopperGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter for place-name lookups using the GraphHopper geocoder
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"GeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create an adapter backed by GraphHopper
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client fails
    /// to initialize.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, ApplicationError> {
        let client = GraphHopperGeocodingClient::new(config).map_err(map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around any geocoding client
    pub fn with_client(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }
}

/// Map GraphHopper errors to application errors, keeping the user-facing text
pub(crate) fn map_error(err: GraphHopperError) -> ApplicationError {
    match err {
        GraphHopperError::EmptyLocation => ApplicationError::Validation(err.to_string()),
        GraphHopperError::LocationNotFound(_) => ApplicationError::LocationNotFound(err.to_string()),
        GraphHopperError::ConfigurationError(message) => ApplicationError::Configuration(message),
        GraphHopperError::ConnectionFailed(_)
        | GraphHopperError::RequestFailed { .. }
        | GraphHopperError::RateLimitExceeded { .. }
        | GraphHopperError::ParseError(_)
        | GraphHopperError::Timeout { .. } => ApplicationError::ExternalService(err.to_string()),
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, location: &str) -> Result<GeocodedPlace, ApplicationError> {
        let result = self.client.geocode(location).await.map_err(map_error);

        match &result {
            Ok(place) => debug!(coordinate = %place.coordinate, "Location resolved"),
            Err(e) => debug!(error = %e, "Geocoding failed"),
        }

        result
    }
}
