//! Geocoding port
//!
//! Resolves free-text place names to coordinates.

use async_trait::async_trait;
use domain::GeocodedPlace;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place-name lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to the coordinates of its best match
    ///
    /// Blank names fail with `ApplicationError::Validation` without any
    /// network call; names without a match fail with
    /// `ApplicationError::LocationNotFound`.
    async fn geocode(&self, location: &str) -> Result<GeocodedPlace, ApplicationError>;
}
