//! Raw GraphHopper response types and their conversion into domain types

use domain::{Coordinate, GeocodedPlace, Instruction, RoutePath, RouteResponse};
use serde::Deserialize;

use crate::error::GraphHopperError;

/// Body of a `/geocode` response
#[derive(Debug, Deserialize)]
pub(crate) struct RawGeocodeResponse {
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

/// A single geocoding hit
#[derive(Debug, Deserialize)]
pub(crate) struct RawHit {
    pub point: RawPoint,
    pub name: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPoint {
    pub lat: f64,
    pub lng: f64,
}

impl RawHit {
    /// Convert into a domain place for the given search text
    pub fn into_place(self, query: &str) -> Result<GeocodedPlace, GraphHopperError> {
        let coordinate = Coordinate::new(self.point.lat, self.point.lng)
            .map_err(|e| GraphHopperError::ParseError(e.to_string()))?;
        Ok(GeocodedPlace {
            query: query.to_string(),
            coordinate,
            name: self.name,
            country: self.country,
        })
    }
}

/// Body of a `/route` response
#[derive(Debug, Deserialize)]
pub(crate) struct RawRouteResponse {
    #[serde(default)]
    pub paths: Vec<RawPath>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPath {
    pub distance: f64,
    pub time: u64,
    #[serde(default)]
    pub points: String,
    #[serde(default)]
    pub instructions: Vec<RawInstruction>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawInstruction {
    pub text: String,
    pub distance: f64,
}

impl From<RawRouteResponse> for RouteResponse {
    fn from(raw: RawRouteResponse) -> Self {
        Self {
            paths: raw.paths.into_iter().map(RoutePath::from).collect(),
        }
    }
}

impl From<RawPath> for RoutePath {
    fn from(raw: RawPath) -> Self {
        Self {
            distance_meters: raw.distance,
            time_millis: raw.time,
            encoded_polyline: raw.points,
            instructions: raw
                .instructions
                .into_iter()
                .map(|i| Instruction {
                    text: i.text,
                    distance_meters: i.distance,
                })
                .collect(),
        }
    }
}
