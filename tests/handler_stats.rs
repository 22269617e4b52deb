mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::{redirect_handler, stats_handler};
use sqlx::PgPool;

fn test_app(state: shortlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_stats_returns_record(pool: PgPool) {
    let server = test_app(common::create_test_state(pool.clone()));

    common::create_test_url(&pool, "stats001", "https://example.com/page").await;

    let response = server.get("/api/stats/stats001").await;

    assert_eq!(response.status_code(), 200);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(data["shortCode"], "stats001");
    assert_eq!(data["longUrl"], "https://example.com/page");
    assert_eq!(data["clicks"], 0);
    assert_eq!(
        data["shortUrl"].as_str().unwrap(),
        format!("{}/stats001", common::TEST_BASE_URL)
    );
    assert!(data["createdAt"].is_string());
    assert!(data["updatedAt"].is_string());
}

#[sqlx::test]
async fn test_stats_reflects_resolutions(pool: PgPool) {
    let server = test_app(common::create_test_state(pool.clone()));

    common::create_test_url(&pool, "counted1", "https://example.com").await;

    server.get("/counted1").await;
    server.get("/counted1").await;

    let response = server.get("/api/stats/counted1").await;
    assert_eq!(response.json::<serde_json::Value>()["data"]["clicks"], 2);
}

#[sqlx::test]
async fn test_stats_does_not_count_clicks(pool: PgPool) {
    let server = test_app(common::create_test_state(pool.clone()));

    common::create_test_url(&pool, "readonly", "https://example.com").await;

    server.get("/api/stats/readonly").await;
    server.get("/api/stats/readonly").await;

    assert_eq!(common::get_clicks(&pool, "readonly").await, 0);
}

#[sqlx::test]
async fn test_stats_not_found(pool: PgPool) {
    let server = test_app(common::create_test_state(pool));

    let response = server.get("/api/stats/missing1").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
}
