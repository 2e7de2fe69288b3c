//! Logging initialization
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter`. `RUST_LOG`
//! takes precedence over the configured filter. Logs go to stderr so command
//! output on stdout stays machine-readable.

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryAppConfig;

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG` if set, otherwise `fallback`
pub fn build_filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))
}

/// Initialize global logging
///
/// `filter_override` (e.g., from `-v` flags) replaces the configured filter.
pub fn init_telemetry(
    config: &TelemetryAppConfig,
    filter_override: Option<&str>,
) -> Result<(), TelemetryError> {
    let filter = build_filter(filter_override.unwrap_or(&config.log_filter))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(json = config.json, "Logging initialized");
    Ok(())
}
