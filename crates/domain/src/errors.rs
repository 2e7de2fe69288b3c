//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude or longitude out of range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Unknown travel mode
    #[error("Invalid vehicle: '{0}'. Use car, bike or foot")]
    InvalidVehicle(String),

    /// Unknown temperature unit
    #[error("Invalid unit: '{0}'. Use metric or imperial")]
    InvalidTemperatureUnit(String),

    /// Encoded polyline could not be decoded
    #[error("Invalid polyline: {0}")]
    InvalidPolyline(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
