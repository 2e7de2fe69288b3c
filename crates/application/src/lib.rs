//! Application layer - Use cases and orchestration
//!
//! Defines the ports through which route lookups reach external services and
//! the services that orchestrate geocoding, routing, fuel and weather for a
//! single "get route" action.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
