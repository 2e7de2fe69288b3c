//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// The display text of every variant is suitable for showing to users.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// A place name could not be resolved
    #[error("{0}")]
    LocationNotFound(String),

    /// The router returned no path between two places
    #[error("Could not find a route from '{from}' to '{to}'.")]
    RouteNotFound {
        /// Start as entered
        from: String,
        /// Destination as entered
        to: String,
    },

    /// External service error
    #[error("{0}")]
    ExternalService(String),

    /// Saving a route report failed
    #[error("Could not save file: {0}")]
    Export(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }

    /// Check if the lookup succeeded but found nothing
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::LocationNotFound(_) | Self::RouteNotFound { .. })
    }
}
