//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::{TemperatureUnit, Vehicle};

/// Link route finder
#[derive(Debug, Parser)]
#[command(name = "link-cli")]
#[command(author, version, about = "Link route finder", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "LINK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find a route between two places
    ///
    /// Example: link-cli route Manila "Quezon City" --fuel-rate 8 --weather
    Route {
        /// Start place name
        from: String,

        /// Destination place name
        to: String,

        /// Mode of transport: car, bike or foot
        #[arg(long, default_value = "car")]
        vehicle: Vehicle,

        /// Strongly discourage toll roads (car only)
        #[arg(long)]
        avoid_tolls: bool,

        /// Fuel consumption in liters per 100 km
        #[arg(long, value_name = "L/100KM")]
        fuel_rate: Option<String>,

        /// Fuel price per liter
        #[arg(long, value_name = "PRICE", requires = "fuel_rate")]
        fuel_price: Option<f64>,

        /// Show the current weather at the destination
        #[arg(long)]
        weather: bool,

        /// Temperature units: metric or imperial (default from config)
        #[arg(long)]
        unit: Option<TemperatureUnit>,

        /// Save the route report to the saved routes directory
        #[arg(long)]
        save: bool,

        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the coordinates of a place
    Geocode {
        /// Place name
        place: String,
    },

    /// Show the current weather at a place
    Weather {
        /// Place name
        place: String,

        /// Temperature units: metric or imperial (default from config)
        #[arg(long)]
        unit: Option<TemperatureUnit>,
    },

    /// Estimate fuel for a distance
    Fuel {
        /// Distance in kilometers
        distance_km: f64,

        /// Consumption in liters per 100 km
        rate: String,

        /// Fuel price per liter
        #[arg(long)]
        price: Option<f64>,
    },
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
