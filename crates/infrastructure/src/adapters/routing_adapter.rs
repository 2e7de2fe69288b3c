//! Routing adapter - Implements RoutingPort using integration_graphhopper

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::{RouteRequest, RouteResponse};
use integration_graphhopper::{GraphHopperConfig, GraphHopperRoutingClient, RoutingClient};
use tracing::{debug, instrument, warn};

use super::geocoding_adapter::map_error;

/// Adapter for route requests using the GraphHopper router
///
/// Failures never reach the caller: they are logged and reported as an empty
/// response, which the route service turns into "route not found".
pub struct RoutingAdapter {
    client: Arc<dyn RoutingClient>,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("client", &"RoutingClient")
            .finish()
    }
}

impl RoutingAdapter {
    /// Create an adapter backed by GraphHopper
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client fails
    /// to initialize.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, ApplicationError> {
        let client = GraphHopperRoutingClient::new(config).map_err(map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around any routing client
    pub fn with_client(client: Arc<dyn RoutingClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip(self, request), fields(vehicle = %request.vehicle, avoid_tolls = request.avoid_tolls))]
    async fn call_route(&self, request: &RouteRequest) -> RouteResponse {
        match self.client.route(request).await {
            Ok(response) => {
                debug!(paths = response.paths.len(), "Route response received");
                response
            },
            Err(e) => {
                warn!(error = %e, "Route request failed");
                RouteResponse::empty()
            },
        }
    }
}
