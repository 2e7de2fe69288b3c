//! Geocoded place entity

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Coordinate;

/// A place name resolved to coordinates by the geocoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// The text the user searched for
    pub query: String,
    /// Position of the first hit
    pub coordinate: Coordinate,
    /// Display name of the hit, when the geocoder reports one
    pub name: Option<String>,
    /// Country of the hit, when the geocoder reports one
    pub country: Option<String>,
}

impl GeocodedPlace {
    /// Best label for display: the hit's name and country, else the query
    #[must_use]
    pub fn label(&self) -> String {
        match (&self.name, &self.country) {
            (Some(name), Some(country)) => format!("{name}, {country}"),
            (Some(name), None) => name.clone(),
            _ => self.query.clone(),
        }
    }
}

impl fmt::Display for GeocodedPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.coordinate)
    }
}
