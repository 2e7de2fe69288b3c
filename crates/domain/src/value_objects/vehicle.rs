//! Travel mode value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Mode of transport understood by the routing service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vehicle {
    /// Motor vehicle
    #[default]
    Car,
    /// Bicycle
    Bike,
    /// Walking
    Foot,
}

impl Vehicle {
    /// All supported travel modes
    pub const ALL: [Self; 3] = [Self::Car, Self::Bike, Self::Foot];

    /// The value sent as the routing `vehicle` parameter
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Foot => "foot",
        }
    }

    /// Capitalized name, used in exported file names
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Bike => "Bike",
            Self::Foot => "Foot",
        }
    }

    /// Whether toll roads are meaningful for this mode
    #[must_use]
    pub const fn uses_toll_roads(&self) -> bool {
        matches!(self, Self::Car)
    }

    /// Whether a fuel estimate is meaningful for this mode
    #[must_use]
    pub const fn consumes_fuel(&self) -> bool {
        matches!(self, Self::Car)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vehicle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "foot" => Ok(Self::Foot),
            other => Err(DomainError::InvalidVehicle(other.to_string())),
        }
    }
}
