//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod route_export_port;
mod routing_port;
mod weather_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use route_export_port::MockRouteExportPort;
pub use route_export_port::RouteExportPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{DestinationWeather, WeatherPort};
