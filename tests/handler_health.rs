mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use form_stats::api::handlers::health_handler;
use form_stats::routes::not_found_handler;

use common::FakeStatsRepository;

fn test_server(repository: FakeStatsRepository) -> TestServer {
    let state = common::create_test_state(repository);
    let app = Router::new()
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = test_server(FakeStatsRepository::new());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded_when_database_down() {
    let server = test_server(FakeStatsRepository::failing());

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = test_server(FakeStatsRepository::new());

    let response = server.get("/no-such-route").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
