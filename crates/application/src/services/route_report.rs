//! Plain-text route reports
//!
//! Renders a [`RoutePlan`] in the layout used for saved route files and
//! derives the file name stem for it.

use std::fmt::Write as _;

use super::route_service::{FuelStatus, RoutePlan, WeatherStatus};

const STEP_WIDTH: usize = 6;
const INSTRUCTION_WIDTH: usize = 60;
const DISTANCE_WIDTH: usize = 10;
const RULE_WIDTH: usize = 80;

/// Toll mode label for a plan
#[must_use]
pub fn toll_mode(plan: &RoutePlan) -> &'static str {
    if !plan.vehicle.uses_toll_roads() {
        "N/A (not applicable for this mode)"
    } else if plan.avoid_tolls {
        "Avoid toll roads"
    } else {
        "Use toll roads"
    }
}

/// Weather label for a plan
#[must_use]
pub fn weather_status(plan: &RoutePlan) -> String {
    match &plan.weather {
        WeatherStatus::Available(weather) => weather.summary(),
        WeatherStatus::Unavailable { .. } => "Unavailable".to_string(),
        WeatherStatus::NotRequested | WeatherStatus::NotConfigured => "N/A".to_string(),
    }
}

/// Summary lines: distance, time and the fuel figures when estimated
#[must_use]
pub fn summary_lines(plan: &RoutePlan) -> Vec<String> {
    let mut lines = vec![
        format!("Distance: {:.2} km", plan.path.distance_km()),
        format!("Estimated Time: {:.2} minutes", plan.path.duration_minutes()),
    ];

    if let FuelStatus::Estimated { estimate, cost } = &plan.fuel {
        lines.push(format!("Fuel Needed: {:.2} L", estimate.liters));
        if let Some(cost) = cost {
            lines.push(format!("Fuel Cost: {cost:.2}"));
        }
    }

    lines
}

/// Render the full report
#[must_use]
pub fn render(plan: &RoutePlan) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Route Information");
    let _ = writeln!(out, "=================");
    let _ = writeln!(out, "Start          : {}", plan.start.query.trim());
    let _ = writeln!(out, "End            : {}", plan.end.query.trim());
    let _ = writeln!(out, "Vehicle        : {}", plan.vehicle);
    let _ = writeln!(out, "Toll Mode      : {}", toll_mode(plan));
    let _ = writeln!(out, "Weather Status : {}", weather_status(plan));
    let _ = writeln!(out);

    let _ = writeln!(out, "Route Summary");
    let _ = writeln!(out, "-------------");
    for line in summary_lines(plan) {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Step-by-Step Directions:");
    let _ = writeln!(out, "-------------------------");
    let _ = writeln!(
        out,
        "{:<STEP_WIDTH$} {:<INSTRUCTION_WIDTH$} {:>DISTANCE_WIDTH$}",
        "Step", "Instruction", "Distance (km)"
    );
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    for (index, step) in plan.path.instructions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<STEP_WIDTH$} {:<INSTRUCTION_WIDTH$} {:>DISTANCE_WIDTH$}",
            index + 1,
            step.text,
            format!("{:.2}", step.distance_km()),
        );
    }

    out
}

/// File name stem: first word of start, first word of end, vehicle title
///
/// Letters and digits in any script, `-` and `_` are kept from each word so
/// the stem is always a single path component.
#[must_use]
pub fn file_stem(plan: &RoutePlan) -> String {
    format!(
        "{}{}{}",
        first_word(&plan.start.query, "Start"),
        first_word(&plan.end.query, "End"),
        plan.vehicle.title()
    )
}

fn first_word(text: &str, fallback: &str) -> String {
    let word: String = text
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
        .collect();

    if word.is_empty() {
        fallback.to_string()
    } else {
        word
    }
}
