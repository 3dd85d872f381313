mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use blog_dashboard::routes::app_routes;
use blog_dashboard::state::AppState;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = common::spawn_app();

    let response = app.server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["message"], "Connected, 0 posts");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_database_down() {
    let state = AppState::from_repositories(
        Arc::new(common::FailingPosts),
        Arc::new(common::InMemoryViews::default()),
        Arc::new(common::StaticUkData::default()),
        false,
    );
    let server = TestServer::new(app_routes(state, "static")).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
