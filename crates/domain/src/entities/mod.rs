//! Entities - request/response objects of a single route lookup

mod place;
mod route;

pub use place::GeocodedPlace;
pub use route::{Instruction, RoutePath, RouteRequest, RouteResponse};
