//! GraphHopper routing client
//!
//! Requests a route between two coordinates from the GraphHopper `/route`
//! endpoint, optionally with a custom model that de-prioritizes toll roads.

use async_trait::async_trait;
use domain::{RouteRequest, RouteResponse};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use crate::config::GraphHopperConfig;
use crate::error::GraphHopperError;
use crate::http;
use crate::models::RawRouteResponse;

/// Priority factor applied to toll segments when tolls should be avoided
const TOLL_PRIORITY_FACTOR: f64 = 0.1;

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Request candidate paths for a route
    async fn route(&self, request: &RouteRequest) -> Result<RouteResponse, GraphHopperError>;
}

/// Custom model that multiplies the priority of toll segments by 0.1
///
/// Toll roads stay usable when no reasonable alternative exists.
#[must_use]
pub fn toll_avoidance_model() -> Value {
    json!({
        "priority": [
            {
                "if": "toll == ALL",
                "multiply_by": TOLL_PRIORITY_FACTOR,
            }
        ]
    })
}

/// GraphHopper-based routing client
#[derive(Debug)]
pub struct GraphHopperRoutingClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperRoutingClient {
    /// Create a new GraphHopper routing client
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
            client: http::build_client(config.route_timeout_secs)?,
            config: config.clone(),
        })
    }

    /// Build the query parameters for a route request
    ///
    /// `point` is repeated: start first, then destination.
    fn route_params(&self, request: &RouteRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("point", request.start.to_point_param()),
            ("point", request.end.to_point_param()),
            ("vehicle", request.vehicle.as_str().to_string()),
            ("locale", self.config.locale.clone()),
            ("points_encoded", "true".to_string()),
            ("key", self.config.api_key().unwrap_or_default().to_string()),
        ];

        if request.avoid_tolls {
            // Custom models require the flexible (non-CH) mode
            params.push(("ch.disable", "true".to_string()));
            params.push(("custom_model", toll_avoidance_model().to_string()));
        }

        params
    }

    /// Parse a routing response body
    fn parse_response(body: &str) -> Result<RouteResponse, GraphHopperError> {
        let raw: RawRouteResponse =
            serde_json::from_str(body).map_err(|e| GraphHopperError::ParseError(e.to_string()))?;
        Ok(raw.into())
    }
}

#[async_trait]
impl RoutingClient for GraphHopperRoutingClient {
    #[instrument(skip(self, request), fields(
        from = %request.start.to_point_param(),
        to = %request.end.to_point_param(),
        vehicle = %request.vehicle,
        avoid_tolls = request.avoid_tolls,
    ))]
    async fn route(&self, request: &RouteRequest) -> Result<RouteResponse, GraphHopperError> {
        let url = self.config.endpoint("route");
        debug!(%url, "Requesting route");

        let body = http::get_body(
            &self.client,
            &url,
            &self.route_params(request),
            self.config.route_timeout_secs,
        )
        .await?;

        let response = Self::parse_response(&body)?;

        if response.is_empty() {
            warn!("No paths found");
        }

        debug!(count = response.paths.len(), "Paths found");
        Ok(response)
    }
}
