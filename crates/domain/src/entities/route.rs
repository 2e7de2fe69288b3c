//! Route request and response entities

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::polyline;
use crate::value_objects::{Coordinate, Vehicle};

/// A request for a route between two coordinates
///
/// Constructed per call; it has no identity beyond one request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Starting point
    pub start: Coordinate,
    /// Destination
    pub end: Coordinate,
    /// Mode of transport
    pub vehicle: Vehicle,
    /// Ask the router to strongly discourage toll segments
    pub avoid_tolls: bool,
}

impl RouteRequest {
    /// Create a request without toll avoidance
    #[must_use]
    pub const fn new(start: Coordinate, end: Coordinate, vehicle: Vehicle) -> Self {
        Self {
            start,
            end,
            vehicle,
            avoid_tolls: false,
        }
    }

    /// Set the toll-avoidance flag
    #[must_use]
    pub const fn with_avoid_tolls(mut self, avoid_tolls: bool) -> Self {
        self.avoid_tolls = avoid_tolls;
        self
    }
}

/// A single turn-by-turn instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Human-readable instruction text
    pub text: String,
    /// Distance covered by this step in meters
    pub distance_meters: f64,
}

impl Instruction {
    /// Distance of this step in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }
}

/// One candidate path returned by the router
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    /// Total distance in meters
    pub distance_meters: f64,
    /// Total travel time in milliseconds
    pub time_millis: u64,
    /// Encoded polyline of the path geometry
    pub encoded_polyline: String,
    /// Ordered turn-by-turn instructions
    pub instructions: Vec<Instruction>,
}

impl RoutePath {
    /// Total distance in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Total travel time in minutes
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // travel times are far below 2^52 ms
    pub fn duration_minutes(&self) -> f64 {
        self.time_millis as f64 / 60_000.0
    }

    /// Decode the path geometry into coordinates
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPolyline` if the encoded string is malformed.
    pub fn points(&self) -> Result<Vec<Coordinate>, DomainError> {
        polyline::decode(&self.encoded_polyline)
    }
}

/// Parsed routing response: zero or more candidate paths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Candidate paths, best first
    pub paths: Vec<RoutePath>,
}

impl RouteResponse {
    /// A response without any path ("route not found")
    #[must_use]
    pub const fn empty() -> Self {
        Self { paths: Vec::new() }
    }

    /// Whether the router found no path
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The first (preferred) path, if any
    #[must_use]
    pub fn first_path(&self) -> Option<&RoutePath> {
        self.paths.first()
    }

    /// Consume the response, keeping only the preferred path
    #[must_use]
    pub fn into_first_path(self) -> Option<RoutePath> {
        self.paths.into_iter().next()
    }
}
