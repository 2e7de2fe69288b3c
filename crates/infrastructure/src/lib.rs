//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the GraphHopper and Open-Meteo
//! clients, stores route reports on disk and loads configuration.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ExportConfig, TelemetryAppConfig, WeatherAppConfig};
pub use persistence::RouteFileStore;
pub use telemetry::{TelemetryError, init_telemetry};
