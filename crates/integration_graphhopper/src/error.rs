//! GraphHopper error types

use thiserror::Error;

/// Errors that can occur while geocoding or routing
///
/// Transport and API failures render with an `API error:` prefix so callers
/// can show them to users unchanged.
#[derive(Debug, Error)]
pub enum GraphHopperError {
    /// The place name was blank after trimming
    #[error("Location name cannot be empty.")]
    EmptyLocation,

    /// The geocoder returned no hits for the place name
    #[error("Invalid location: '{0}'. Please try again.")]
    LocationNotFound(String),

    /// Connection to GraphHopper failed
    #[error("API error: connection failed: {0}")]
    ConnectionFailed(String),

    /// GraphHopper answered with a non-success status
    #[error("API error: HTTP {status}: {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Message from the response body, or the status reason
        message: String,
    },

    /// Rate limit or credit quota exceeded
    #[error("API error: rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Response body could not be parsed
    #[error("API error: invalid response: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("API error: request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GraphHopperError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RateLimitExceeded { .. }
        ) || matches!(self, Self::RequestFailed { status, .. } if *status >= 500)
    }

    /// Returns true if the request succeeded but found nothing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::LocationNotFound(_))
    }

    /// Returns true if the input was rejected before any request was made
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyLocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(GraphHopperError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(GraphHopperError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(
            GraphHopperError::RateLimitExceeded {
                retry_after_secs: Some(60)
            }
            .is_retryable()
        );
        assert!(
            GraphHopperError::RequestFailed {
                status: 503,
                message: "unavailable".to_string()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!GraphHopperError::EmptyLocation.is_retryable());
        assert!(!GraphHopperError::LocationNotFound("x".to_string()).is_retryable());
        assert!(!GraphHopperError::ParseError("test".to_string()).is_retryable());
        assert!(
            !GraphHopperError::RequestFailed {
                status: 400,
                message: "bad point".to_string()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_error_display() {
        let err = GraphHopperError::EmptyLocation;
        assert!(err.to_string().to_lowercase().contains("cannot be empty"));

        let err = GraphHopperError::LocationNotFound("Atlantis".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid location: 'Atlantis'. Please try again."
        );

        let err = GraphHopperError::RequestFailed {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.to_string().starts_with("API error"));
        assert!(err.to_string().contains("500"));

        let err = GraphHopperError::Timeout { timeout_secs: 45 };
        assert!(err.to_string().contains("45"));
    }

    #[test]
    fn test_classifiers() {
        assert!(GraphHopperError::EmptyLocation.is_validation());
        assert!(GraphHopperError::LocationNotFound("x".to_string()).is_not_found());
        assert!(!GraphHopperError::ParseError("x".to_string()).is_not_found());
    }
}
