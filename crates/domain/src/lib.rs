//! Domain layer for Link
//!
//! Contains the route-finding vocabulary: coordinates, travel modes, route
//! paths and the fuel estimator. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod fuel;
pub mod polyline;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use fuel::{FuelEstimate, estimate_fuel, estimate_fuel_from_input};
pub use value_objects::*;
