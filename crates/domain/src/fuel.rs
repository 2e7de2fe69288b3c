//! Fuel consumption estimate

use serde::{Deserialize, Serialize};

/// Liters of fuel needed for a trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelEstimate {
    /// Estimated fuel in liters
    pub liters: f64,
}

impl FuelEstimate {
    /// Cost of the estimated fuel at the given price per liter
    #[must_use]
    pub fn cost(&self, price_per_liter: f64) -> f64 {
        self.liters * price_per_liter
    }
}

/// Estimate fuel for `distance_km` at `liters_per_100km`
///
/// Returns `None` when the rate is not a finite, non-negative number.
/// Negative rates are rejected on purpose rather than run through the
/// formula, which would report a negative amount of fuel.
#[must_use]
pub fn estimate_fuel(distance_km: f64, liters_per_100km: f64) -> Option<FuelEstimate> {
    if !liters_per_100km.is_finite() || liters_per_100km < 0.0 || !distance_km.is_finite() {
        return None;
    }
    Some(FuelEstimate {
        liters: distance_km * liters_per_100km / 100.0,
    })
}

/// Estimate fuel from a user-entered consumption rate
///
/// Text that does not parse as a number yields `None` rather than an error.
#[must_use]
pub fn estimate_fuel_from_input(distance_km: f64, liters_per_100km: &str) -> Option<FuelEstimate> {
    let rate = liters_per_100km.trim().parse::<f64>().ok()?;
    estimate_fuel(distance_km, rate)
}
