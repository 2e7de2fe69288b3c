//! Routing port
//!
//! Requests routes between two coordinates.

use async_trait::async_trait;
use domain::{RouteRequest, RouteResponse};
#[cfg(test)]
use mockall::automock;

/// Port for route requests
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Request candidate paths for a route
    ///
    /// Transport and API failures are not propagated: implementations log
    /// them and return an empty response, which callers report as
    /// "route not found".
    async fn call_route(&self, request: &RouteRequest) -> RouteResponse;
}
