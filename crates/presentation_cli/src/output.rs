//! Terminal output for command results

use application::{FuelStatus, RoutePlan, WeatherStatus, route_report};
use domain::{FuelEstimate, GeocodedPlace};

const INSTRUCTION_WIDTH: usize = 56;

/// Route overview followed by numbered directions
pub fn format_plan(plan: &RoutePlan) -> String {
    let mut out = format!(
        "🗺️  {} → {} ({})\n",
        plan.start.label(),
        plan.end.label(),
        plan.vehicle
    );

    out.push_str(&format!(
        "📏 Distance: {:.2} km\n",
        plan.path.distance_km()
    ));
    out.push_str(&format!(
        "⏱️  Estimated Time: {:.2} minutes\n",
        plan.path.duration_minutes()
    ));
    out.push_str(&format!("🛣️  Toll Mode: {}\n", route_report::toll_mode(plan)));
    if !plan.geometry.is_empty() {
        out.push_str(&format!("🧭 Path: {} points\n", plan.geometry.len()));
    }

    match &plan.fuel {
        FuelStatus::Estimated { estimate, cost } => out.push_str(&format_fuel(*estimate, *cost)),
        FuelStatus::InvalidRate => out.push_str("⚠️  Fuel rate must be a non-negative number\n"),
        FuelStatus::NotApplicable => {
            out.push_str(&format!("⛽ No fuel needed on {}\n", plan.vehicle));
        },
        FuelStatus::NotRequested => {},
    }

    match &plan.weather {
        WeatherStatus::Available(weather) => {
            out.push_str(&format!("🌤️  Weather at destination: {}\n", weather.summary()));
            if let Some(details) = weather.details() {
                out.push_str(&format!("   ({details})\n"));
            }
        },
        WeatherStatus::Unavailable { reason } => {
            out.push_str(&format!("⚠️  Weather unavailable: {reason}\n"));
        },
        WeatherStatus::NotConfigured => {
            out.push_str("⚠️  Weather lookups are disabled in the configuration\n");
        },
        WeatherStatus::NotRequested => {},
    }

    out.push_str("\n📋 Directions:\n");
    for (index, step) in plan.path.instructions.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}. {:<INSTRUCTION_WIDTH$} {:>8.2} km\n",
            index + 1,
            step.text,
            step.distance_km()
        ));
    }

    out
}

/// Fuel and optional cost lines
pub fn format_fuel(estimate: FuelEstimate, cost: Option<f64>) -> String {
    let mut out = format!("⛽ Fuel Needed: {:.2} L\n", estimate.liters);
    if let Some(cost) = cost {
        out.push_str(&format!("💰 Fuel Cost: {cost:.2}\n"));
    }
    out
}

/// Resolved place with its coordinates
pub fn format_place(place: &GeocodedPlace) -> String {
    format!(
        "📍 {}\n   Latitude:  {:.6}\n   Longitude: {:.6}\n",
        place.label(),
        place.coordinate.latitude(),
        place.coordinate.longitude()
    )
}
