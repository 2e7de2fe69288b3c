//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod temperature_unit;
mod vehicle;

pub use coordinate::Coordinate;
pub use temperature_unit::TemperatureUnit;
pub use vehicle::Vehicle;
