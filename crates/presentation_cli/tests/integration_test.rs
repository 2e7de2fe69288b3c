//! Integration tests for CLI
//!
//! These tests verify command parsing without running any command.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use domain::{TemperatureUnit, Vehicle};
use presentation_cli::cli::{Cli, Commands};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_route_with_defaults() {
    let cli = parse_args(&["link-cli", "route", "Manila", "Quezon City"]).unwrap();
    let Commands::Route {
        from,
        to,
        vehicle,
        avoid_tolls,
        fuel_rate,
        fuel_price,
        weather,
        unit,
        save,
        json,
    } = cli.command
    else {
        panic!("Expected Route command");
    };

    assert_eq!(from, "Manila");
    assert_eq!(to, "Quezon City");
    assert_eq!(vehicle, Vehicle::Car);
    assert!(!avoid_tolls);
    assert_eq!(fuel_rate, None);
    assert_eq!(fuel_price, None);
    assert!(!weather);
    assert_eq!(unit, None);
    assert!(!save);
    assert!(!json);
}

#[test]
fn cli_parses_route_with_all_options() {
    let cli = parse_args(&[
        "link-cli",
        "route",
        "Manila",
        "Baguio",
        "--vehicle",
        "CAR",
        "--avoid-tolls",
        "--fuel-rate",
        "7.5",
        "--fuel-price",
        "62.5",
        "--weather",
        "--unit",
        "imperial",
        "--save",
        "--json",
    ])
    .unwrap();

    let Commands::Route {
        vehicle,
        avoid_tolls,
        fuel_rate,
        fuel_price,
        weather,
        unit,
        save,
        json,
        ..
    } = cli.command
    else {
        panic!("Expected Route command");
    };

    assert_eq!(vehicle, Vehicle::Car);
    assert!(avoid_tolls);
    assert_eq!(fuel_rate.as_deref(), Some("7.5"));
    assert_eq!(fuel_price, Some(62.5));
    assert!(weather);
    assert_eq!(unit, Some(TemperatureUnit::Fahrenheit));
    assert!(save);
    assert!(json);
}

#[test]
fn cli_accepts_non_numeric_fuel_rate_text() {
    // The rate is validated when the estimate is computed, not by the parser
    let cli = parse_args(&["link-cli", "route", "A", "B", "--fuel-rate", "lots"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Route { fuel_rate: Some(ref rate), .. } if rate == "lots"
    ));
}

#[test]
fn cli_rejects_unknown_vehicle() {
    let result = parse_args(&["link-cli", "route", "A", "B", "--vehicle", "boat"]);
    assert!(result.is_err());
}

#[test]
fn cli_fuel_price_requires_rate() {
    let result = parse_args(&["link-cli", "route", "A", "B", "--fuel-price", "60"]);
    assert!(result.is_err());
}

#[test]
fn cli_route_requires_both_places() {
    assert!(parse_args(&["link-cli", "route", "Manila"]).is_err());
}

#[test]
fn cli_parses_geocode() {
    let cli = parse_args(&["link-cli", "geocode", "Quezon City"]).unwrap();
    if let Commands::Geocode { place } = cli.command {
        assert_eq!(place, "Quezon City");
    } else {
        panic!("Expected Geocode command");
    }
}

#[test]
fn cli_parses_weather_with_unit() {
    let cli = parse_args(&["link-cli", "weather", "Cebu", "--unit", "metric"]).unwrap();
    if let Commands::Weather { place, unit } = cli.command {
        assert_eq!(place, "Cebu");
        assert_eq!(unit, Some(TemperatureUnit::Celsius));
    } else {
        panic!("Expected Weather command");
    }
}

#[test]
fn cli_parses_fuel() {
    let cli = parse_args(&["link-cli", "fuel", "100", "8", "--price", "65"]).unwrap();
    if let Commands::Fuel {
        distance_km,
        rate,
        price,
    } = cli.command
    {
        assert!((distance_km - 100.0).abs() < f64::EPSILON);
        assert_eq!(rate, "8");
        assert_eq!(price, Some(65.0));
    } else {
        panic!("Expected Fuel command");
    }
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = parse_args(&[
        "link-cli",
        "geocode",
        "Manila",
        "-vv",
        "--config",
        "/etc/link/config.toml",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config, Some(PathBuf::from("/etc/link/config.toml")));
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["link-cli"]).is_err());
}

#[test]
fn cli_help_flag() {
    let result = parse_args(&["link-cli", "--help"]);
    assert!(result.is_err());
    assert_eq!(
        result.err().map(|e| e.kind()),
        Some(clap::error::ErrorKind::DisplayHelp)
    );
}
