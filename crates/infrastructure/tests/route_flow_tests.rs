//! End-to-end tests for a route lookup through the adapters
//!
//! GraphHopper and Open-Meteo are replaced by wiremock servers; saved
//! reports go to a temporary directory.

use std::sync::Arc;

use application::{ApplicationError, ExportService, FuelStatus, RouteQuery, RouteService, WeatherStatus};
use domain::{TemperatureUnit, Vehicle};
use infrastructure::{GeocodingAdapter, RouteFileStore, RoutingAdapter, WeatherAdapter};
use integration_graphhopper::GraphHopperConfig;
use integration_weather::WeatherConfig;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_place(server: &MockServer, query: &str, lat: f64, lng: f64) {
    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [{
                "point": {"lat": lat, "lng": lng},
                "name": query,
                "country": "Philippines"
            }]
        })))
        .mount(server)
        .await;
}

async fn mount_route(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paths": [{
                "distance": 12500.0,
                "time": 1_500_000,
                "points": "_p~iF~ps|U_ulLnnqC",
                "instructions": [
                    {"text": "Head north on Taft Avenue", "distance": 12000.0},
                    {"text": "Arrive at destination", "distance": 500.0}
                ]
            }]
        })))
        .mount(server)
        .await;
}

fn route_service(graphhopper: &MockServer) -> RouteService {
    let config = GraphHopperConfig {
        base_url: graphhopper.uri(),
        ..GraphHopperConfig::for_testing()
    };
    RouteService::new(
        Arc::new(GeocodingAdapter::new(&config).unwrap()),
        Arc::new(RoutingAdapter::new(&config).unwrap()),
    )
}

fn car_query() -> RouteQuery {
    RouteQuery::new("Manila", "Quezon City", Vehicle::Car)
}

#[tokio::test]
async fn plans_route_with_fuel_and_weather() {
    let graphhopper = MockServer::start().await;
    mount_place(&graphhopper, "Manila", 14.5995, 120.9842).await;
    mount_place(&graphhopper, "Quezon City", 14.676, 121.0437).await;
    mount_route(&graphhopper).await;

    let open_meteo = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("temperature_unit", "celsius"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": {"temperature": 31.2, "windspeed": 9.0, "weathercode": 3}
        })))
        .expect(1)
        .mount(&open_meteo)
        .await;

    let weather = WeatherAdapter::new(WeatherConfig {
        base_url: open_meteo.uri(),
        timeout_secs: 5,
    })
    .unwrap();
    let service = route_service(&graphhopper).with_weather(Arc::new(weather));

    let mut query = car_query();
    query.fuel_rate = Some("8".to_string());
    query.fuel_price = Some(65.0);
    query.weather_unit = Some(TemperatureUnit::Celsius);

    let plan = service.plan(&query).await.unwrap();

    assert!((plan.path.distance_km() - 12.5).abs() < 1e-9);
    assert!((plan.path.duration_minutes() - 25.0).abs() < 1e-9);
    assert_eq!(plan.end.label(), "Quezon City, Philippines");
    match plan.fuel {
        FuelStatus::Estimated { estimate, cost } => {
            assert!((estimate.liters - 1.0).abs() < 1e-9);
            assert!((cost.unwrap() - 65.0).abs() < 1e-9);
        },
        other => panic!("unexpected fuel status: {other:?}"),
    }
    assert_eq!(plan.geometry.len(), 2);
    match plan.weather {
        WeatherStatus::Available(ref w) => {
            assert_eq!(w.summary(), "31.2 °C, Overcast");
            assert_eq!(w.wind_speed_kmh, Some(9.0));
        },
        ref other => panic!("unexpected weather status: {other:?}"),
    }
}

#[tokio::test]
async fn unknown_destination_is_reported() {
    let graphhopper = MockServer::start().await;
    mount_place(&graphhopper, "Manila", 14.5995, 120.9842).await;
    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("q", "Nowhere"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hits": []})))
        .mount(&graphhopper)
        .await;
    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&graphhopper)
        .await;

    let err = route_service(&graphhopper)
        .plan(&RouteQuery::new("Manila", "Nowhere", Vehicle::Car))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid location: 'Nowhere'. Please try again.");
}

#[tokio::test]
async fn routing_failure_is_route_not_found() {
    let graphhopper = MockServer::start().await;
    mount_place(&graphhopper, "Manila", 14.5995, 120.9842).await;
    mount_place(&graphhopper, "Quezon City", 14.676, 121.0437).await;
    Mock::given(method("GET"))
        .and(path("/route"))
        .and(query_param("ch.disable", "true"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Custom models are not supported"})),
        )
        .expect(1)
        .mount(&graphhopper)
        .await;

    let mut query = car_query();
    query.avoid_tolls = true;

    let err = route_service(&graphhopper).plan(&query).await.unwrap_err();
    assert!(matches!(err, ApplicationError::RouteNotFound { .. }));
}

#[tokio::test]
async fn weather_outage_keeps_route() {
    let graphhopper = MockServer::start().await;
    mount_place(&graphhopper, "Manila", 14.5995, 120.9842).await;
    mount_place(&graphhopper, "Quezon City", 14.676, 121.0437).await;
    mount_route(&graphhopper).await;

    let open_meteo = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&open_meteo)
        .await;

    let weather = WeatherAdapter::new(WeatherConfig {
        base_url: open_meteo.uri(),
        timeout_secs: 5,
    })
    .unwrap();

    let mut query = car_query();
    query.weather_unit = Some(TemperatureUnit::Fahrenheit);

    let plan = route_service(&graphhopper)
        .with_weather(Arc::new(weather))
        .plan(&query)
        .await
        .unwrap();

    assert!(matches!(plan.weather, WeatherStatus::Unavailable { .. }));
}

#[tokio::test]
async fn saves_report_without_overwriting() {
    let graphhopper = MockServer::start().await;
    mount_place(&graphhopper, "Manila", 14.5995, 120.9842).await;
    mount_place(&graphhopper, "Quezon City", 14.676, 121.0437).await;
    mount_route(&graphhopper).await;

    let plan = route_service(&graphhopper).plan(&car_query()).await.unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let export = ExportService::new(Arc::new(RouteFileStore::new(tmp.path().join("saved_routes"))));

    let first = export.save(&plan).await.unwrap();
    let second = export.save(&plan).await.unwrap();

    assert_eq!(first.file_name().unwrap(), "ManilaQuezonCar.txt");
    assert_eq!(second.file_name().unwrap(), "ManilaQuezonCar(1).txt");

    let report = std::fs::read_to_string(&first).unwrap();
    assert!(report.starts_with("Route Information\n=================\n"));
    assert!(report.contains("Start          : Manila\n"));
    assert!(report.contains("Toll Mode      : Use toll roads\n"));
    assert!(report.contains("Distance: 12.50 km\n"));
    assert!(report.contains("Head north on Taft Avenue"));
}
