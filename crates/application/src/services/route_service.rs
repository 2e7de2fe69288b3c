//! Route Service - Plans a route from two place names
//!
//! Runs one "get route" action end to end: geocode start, geocode
//! destination, request the route, then derive the fuel estimate and look up
//! the destination weather. Every step runs sequentially.

use std::sync::Arc;

use domain::{
    Coordinate, FuelEstimate, GeocodedPlace, RoutePath, RouteRequest, TemperatureUnit, Vehicle,
    estimate_fuel_from_input,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DestinationWeather, GeocodingPort, RoutingPort, WeatherPort},
};

/// Input of one route lookup, as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteQuery {
    /// Start place name
    pub start: String,
    /// Destination place name
    pub end: String,
    /// Mode of transport
    pub vehicle: Vehicle,
    /// Strongly discourage toll roads
    pub avoid_tolls: bool,
    /// Consumption in liters per 100 km, as entered
    pub fuel_rate: Option<String>,
    /// Fuel price per liter
    pub fuel_price: Option<f64>,
    /// Look up the destination weather in this unit
    pub weather_unit: Option<TemperatureUnit>,
}

impl RouteQuery {
    /// Query with only the required fields set
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>, vehicle: Vehicle) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            vehicle,
            avoid_tolls: false,
            fuel_rate: None,
            fuel_price: None,
            weather_unit: None,
        }
    }
}

/// Fuel estimate outcome for a planned route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FuelStatus {
    /// No consumption rate was given
    NotRequested,
    /// The travel mode burns no fuel
    NotApplicable,
    /// The consumption rate was not a usable number
    InvalidRate,
    /// Fuel was estimated
    Estimated {
        /// Liters needed
        estimate: FuelEstimate,
        /// Cost at the given price, if a price was given
        cost: Option<f64>,
    },
}

/// Destination weather outcome for a planned route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeatherStatus {
    /// Weather was not requested
    NotRequested,
    /// No weather service is configured
    NotConfigured,
    /// The lookup failed; the route is still valid
    Unavailable {
        /// Why the lookup failed
        reason: String,
    },
    /// Current weather at the destination
    Available(DestinationWeather),
}

/// Result of a successful route lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Resolved start
    pub start: GeocodedPlace,
    /// Resolved destination
    pub end: GeocodedPlace,
    /// Mode of transport
    pub vehicle: Vehicle,
    /// Whether toll roads were discouraged
    pub avoid_tolls: bool,
    /// The preferred path
    pub path: RoutePath,
    /// Decoded path geometry; empty when the polyline could not be decoded
    pub geometry: Vec<Coordinate>,
    /// Fuel estimate outcome
    pub fuel: FuelStatus,
    /// Destination weather outcome
    pub weather: WeatherStatus,
}

/// Service orchestrating geocoding, routing, fuel and weather
pub struct RouteService {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
    weather: Option<Arc<dyn WeatherPort>>,
}

impl std::fmt::Debug for RouteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteService")
            .field("weather", &self.weather.is_some())
            .finish_non_exhaustive()
    }
}

impl RouteService {
    /// Create a new route service
    pub fn new(geocoder: Arc<dyn GeocodingPort>, router: Arc<dyn RoutingPort>) -> Self {
        Self {
            geocoder,
            router,
            weather: None,
        }
    }

    /// Enable destination weather lookups
    #[must_use]
    pub fn with_weather(mut self, weather: Arc<dyn WeatherPort>) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Resolve a single place name
    #[instrument(skip(self))]
    pub async fn geocode(&self, location: &str) -> Result<GeocodedPlace, ApplicationError> {
        self.geocoder.geocode(location).await
    }

    /// Current weather at a place name
    #[instrument(skip(self))]
    pub async fn weather_at(
        &self,
        location: &str,
        unit: TemperatureUnit,
    ) -> Result<(GeocodedPlace, DestinationWeather), ApplicationError> {
        let weather = self.weather.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("weather service is not configured".to_string())
        })?;

        let place = self.geocoder.geocode(location).await?;
        let current = weather.current_weather(place.coordinate, unit).await?;
        Ok((place, current))
    }

    /// Plan a route for the given query
    ///
    /// # Errors
    ///
    /// - `Validation` if either place name is blank (no request is made)
    /// - `LocationNotFound` / `ExternalService` from geocoding
    /// - `RouteNotFound` if the router returns no path
    #[instrument(skip(self, query), fields(start = %query.start, end = %query.end, vehicle = %query.vehicle))]
    pub async fn plan(&self, query: &RouteQuery) -> Result<RoutePlan, ApplicationError> {
        if query.start.trim().is_empty() || query.end.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "Please enter both start and destination.".to_string(),
            ));
        }

        let start = self.geocoder.geocode(&query.start).await?;
        let end = self.geocoder.geocode(&query.end).await?;
        debug!(start = %start.coordinate, end = %end.coordinate, "Both locations resolved");

        let request = RouteRequest::new(start.coordinate, end.coordinate, query.vehicle)
            .with_avoid_tolls(query.avoid_tolls);

        let path = self
            .router
            .call_route(&request)
            .await
            .into_first_path()
            .ok_or_else(|| ApplicationError::RouteNotFound {
                from: query.start.trim().to_string(),
                to: query.end.trim().to_string(),
            })?;

        info!(
            distance_km = path.distance_km(),
            duration_min = path.duration_minutes(),
            steps = path.instructions.len(),
            "Route found"
        );

        let geometry = path.points().unwrap_or_else(|e| {
            warn!(error = %e, "Route geometry could not be decoded");
            Vec::new()
        });
        let fuel = Self::fuel_status(query, &path);
        let weather = self.weather_status(query, &end).await;

        Ok(RoutePlan {
            start,
            end,
            vehicle: query.vehicle,
            avoid_tolls: query.avoid_tolls,
            path,
            geometry,
            fuel,
            weather,
        })
    }

    fn fuel_status(query: &RouteQuery, path: &RoutePath) -> FuelStatus {
        let Some(rate) = query.fuel_rate.as_deref() else {
            return FuelStatus::NotRequested;
        };
        if !query.vehicle.consumes_fuel() {
            return FuelStatus::NotApplicable;
        }

        match estimate_fuel_from_input(path.distance_km(), rate) {
            Some(estimate) => FuelStatus::Estimated {
                estimate,
                cost: query.fuel_price.map(|price| estimate.cost(price)),
            },
            None => {
                debug!(%rate, "Fuel rate is not a usable number");
                FuelStatus::InvalidRate
            },
        }
    }

    async fn weather_status(&self, query: &RouteQuery, end: &GeocodedPlace) -> WeatherStatus {
        let Some(unit) = query.weather_unit else {
            return WeatherStatus::NotRequested;
        };
        let Some(weather) = self.weather.as_ref() else {
            return WeatherStatus::NotConfigured;
        };

        match weather.current_weather(end.coordinate, unit).await {
            Ok(current) => WeatherStatus::Available(current),
            Err(e) => {
                warn!(error = %e, "Destination weather lookup failed");
                WeatherStatus::Unavailable {
                    reason: e.to_string(),
                }
            },
        }
    }
}
