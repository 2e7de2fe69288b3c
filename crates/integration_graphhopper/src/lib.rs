//! GraphHopper integration for Link
//!
//! Provides place-name geocoding and point-to-point routing via the
//! [GraphHopper Directions API](https://docs.graphhopper.com).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other integration crates.
//! [`GeocodingClient`] resolves place names, implemented by [`GraphHopperGeocodingClient`].
//! [`RoutingClient`] requests routes, implemented by [`GraphHopperRoutingClient`].
//! Both report failures as [`GraphHopperError`]; deciding how to surface them is left
//! to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::{RouteRequest, Vehicle};
//! use integration_graphhopper::{
//!     GeocodingClient, GraphHopperConfig, GraphHopperGeocodingClient,
//!     GraphHopperRoutingClient, RoutingClient,
//! };
//!
//! let config = GraphHopperConfig::with_api_key("my-key");
//! let geocoder = GraphHopperGeocodingClient::new(&config)?;
//! let router = GraphHopperRoutingClient::new(&config)?;
//!
//! let start = geocoder.geocode("Manila").await?;
//! let end = geocoder.geocode("Quezon City").await?;
//! let response = router
//!     .route(&RouteRequest::new(start.coordinate, end.coordinate, Vehicle::Car))
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod http;
mod models;

pub use client::{GraphHopperRoutingClient, RoutingClient, toll_avoidance_model};
pub use config::GraphHopperConfig;
pub use error::GraphHopperError;
pub use geocoding::{GeocodingClient, GraphHopperGeocodingClient};
