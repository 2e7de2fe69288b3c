//! Link CLI
//!
//! Command-line front end for route lookups, geocoding, weather and fuel
//! estimates.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use anyhow::Context;
use application::{ExportService, RouteQuery, RouteService};
use clap::Parser;
use domain::{TemperatureUnit, estimate_fuel_from_input};
use infrastructure::{
    AppConfig, GeocodingAdapter, RouteFileStore, RoutingAdapter, WeatherAdapter, init_telemetry,
};
use presentation_cli::cli::{Cli, Commands, log_filter_from_verbosity};
use presentation_cli::output;
use tracing::debug;

/// Wire the route service from configuration
fn build_route_service(config: &AppConfig) -> anyhow::Result<RouteService> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let geocoder = GeocodingAdapter::new(&config.graphhopper)?;
    let router = RoutingAdapter::new(&config.graphhopper)?;
    let mut service = RouteService::new(Arc::new(geocoder), Arc::new(router));

    if config.weather.enabled {
        let weather = WeatherAdapter::new(config.weather.client_config())?;
        service = service.with_weather(Arc::new(weather));
    }

    Ok(service)
}

/// Unit from the command line, else from configuration
fn resolve_unit(
    config: &AppConfig,
    unit: Option<TemperatureUnit>,
) -> anyhow::Result<TemperatureUnit> {
    match unit {
        Some(unit) => Ok(unit),
        None => Ok(config.weather.default_unit()?),
    }
}

/// Print an error the way the CLI reports failures and exit non-zero
fn fail(message: impl std::fmt::Display) -> ! {
    println!("❌ {message}");
    std::process::exit(1);
}

#[tokio::main]
#[allow(clippy::too_many_lines)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    init_telemetry(&config.telemetry, log_filter_from_verbosity(cli.verbose))?;
    debug!(?config, "Starting link-cli");

    match cli.command {
        Commands::Route {
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
        } => {
            let service = build_route_service(&config)?;

            let query = RouteQuery {
                start: from,
                end: to,
                vehicle,
                avoid_tolls,
                fuel_rate,
                fuel_price,
                weather_unit: if weather {
                    Some(resolve_unit(&config, unit)?)
                } else {
                    None
                },
            };

            if !json {
                println!("🔎 Finding route: {} → {}", query.start.trim(), query.end.trim());
            }

            let plan = match service.plan(&query).await {
                Ok(plan) => plan,
                Err(e) => fail(e),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!();
                print!("{}", output::format_plan(&plan));
            }

            if save {
                let export = ExportService::new(Arc::new(RouteFileStore::new(
                    config.export.directory.clone(),
                )));
                match export.save(&plan).await {
                    Ok(path) => println!("\n💾 Route saved to: {}", path.display()),
                    Err(e) => fail(e),
                }
            }
        },

        Commands::Geocode { place } => {
            let service = build_route_service(&config)?;
            match service.geocode(&place).await {
                Ok(found) => print!("{}", output::format_place(&found)),
                Err(e) => fail(e),
            }
        },

        Commands::Weather { place, unit } => {
            let unit = resolve_unit(&config, unit)?;
            let service = build_route_service(&config)?;
            match service.weather_at(&place, unit).await {
                Ok((found, weather)) => {
                    println!("🌤️  Weather in {}: {}", found.label(), weather.summary());
                    if let Some(details) = weather.details() {
                        println!("   ({details})");
                    }
                },
                Err(e) => fail(e),
            }
        },

        Commands::Fuel {
            distance_km,
            rate,
            price,
        } => match estimate_fuel_from_input(distance_km, &rate) {
            Some(estimate) => {
                print!(
                    "{}",
                    output::format_fuel(estimate, price.map(|p| estimate.cost(p)))
                );
            },
            None => fail(format!(
                "Invalid fuel consumption rate: '{}'. Enter liters per 100 km.",
                rate.trim()
            )),
        },
    }

    Ok(())
}
