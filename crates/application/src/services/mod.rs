//! Application services - Use case implementations

mod export_service;
pub mod route_report;
mod route_service;

pub use export_service::ExportService;
pub use route_service::{FuelStatus, RoutePlan, RouteQuery, RouteService, WeatherStatus};
