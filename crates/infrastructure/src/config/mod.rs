//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: Open-Meteo weather settings
//! - `export`: saved-route directory
//! - `telemetry`: log filter and format
//!
//! GraphHopper settings reuse [`GraphHopperConfig`] from the integration crate.

mod export;
mod integrations;
mod telemetry;

use std::path::Path;

use integration_graphhopper::GraphHopperConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use export::ExportConfig;
pub use integrations::WeatherAppConfig;
pub use telemetry::TelemetryAppConfig;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "LINK";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// GraphHopper geocoding and routing
    #[serde(default)]
    pub graphhopper: GraphHopperConfig,

    /// Destination weather
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Saved route reports
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. built-in defaults
    /// 2. `config.toml` in the working directory, or `path` when given
    ///    (which must then exist)
    /// 3. environment variables such as `LINK_GRAPHHOPPER__API_KEY` or
    ///    `LINK_EXPORT__DIRECTORY`
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = path.map_or_else(
            || config::File::with_name("config").required(false),
            |path| config::File::from(path).required(true),
        );

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("export.directory", "saved_routes")?
            .set_default("telemetry.log_filter", "warn")?
            .add_source(file)
            // Override with environment variables (e.g., LINK_GRAPHHOPPER__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Validate every section
    ///
    /// Returns the first problem found, prefixed with its section name.
    pub fn validate(&self) -> Result<(), String> {
        self.graphhopper
            .validate()
            .map_err(|e| format!("graphhopper: {e}"))?;
        self.weather.validate().map_err(|e| format!("weather: {e}"))?;
        self.export.validate().map_err(|e| format!("export: {e}"))?;
        self.telemetry
            .validate()
            .map_err(|e| format!("telemetry: {e}"))?;
        Ok(())
    }
}
