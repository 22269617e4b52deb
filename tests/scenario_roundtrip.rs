mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use shortlink::api::handlers::{redirect_handler, shorten_handler, stats_handler};
use sqlx::PgPool;

fn full_app(state: shortlink::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// Shorten "google.com", resolve the code, shorten it again: one record,
// one click, same code throughout.
#[sqlx::test]
async fn test_shorten_resolve_shorten_round_trip(pool: PgPool) {
    let server = full_app(common::create_test_state(pool.clone()));

    let created = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "longUrl": "google.com" }))
        .await;
    assert_eq!(created.status_code(), 201);

    let created_body = created.json::<serde_json::Value>();
    assert_eq!(created_body["data"]["longUrl"], "https://google.com/");
    assert_eq!(created_body["data"]["clicks"], 0);

    let code = created_body["data"]["shortCode"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 8);

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 301);
    assert_eq!(redirect.header("location"), "https://google.com/");
    assert_eq!(common::get_clicks(&pool, &code).await, 1);

    let again = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "longUrl": "google.com" }))
        .await;
    assert_eq!(again.status_code(), 200);

    let again_body = again.json::<serde_json::Value>();
    assert_eq!(again_body["data"]["shortCode"].as_str().unwrap(), code);
    // The dedup hit reflects prior resolutions and adds none of its own.
    assert_eq!(again_body["data"]["clicks"], 1);
    assert_eq!(common::count_urls(&pool).await, 1);

    let stats = server.get(&format!("/api/stats/{code}")).await;
    assert_eq!(stats.status_code(), 200);
    assert_eq!(stats.json::<serde_json::Value>()["data"]["clicks"], 1);
}
