mod common;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use linkstat::infrastructure::persistence::PoolSettings;
use linkstat::prelude::*;
use linkstat::routes::app_router;

async fn app_server() -> (TestServer, mpsc::Receiver<linkstat::domain::click_event::ClickEvent>) {
    let database = Database::connect_with("sqlite::memory:", &PoolSettings::default())
        .await
        .unwrap();
    database.bootstrap_schema().await.unwrap();

    let shortener = Arc::new(ShortenerService::new(database.link_repository()));
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(shortener, tx, false);

    let app = Router::new()
        .fallback_service(app_router(state, Duration::from_secs(10)))
        .layer(common::MockConnectInfoLayer);

    (TestServer::new(app).unwrap(), rx)
}

#[tokio::test]
async fn test_every_route_through_app_router() {
    let (server, mut click_rx) = app_server().await;

    let front = server.get("/").await;
    front.assert_status_ok();
    assert!(front.text().contains("<form"));

    // two segments, never taken for a short id
    let heartbeat = server.get("/heart/beat").await;
    heartbeat.assert_status_ok();
    assert!(heartbeat.text().is_empty());

    let created = server
        .post("/generate")
        .json(&json!({ "Url": "http://example.com/a" }))
        .await;
    created.assert_status_ok();
    let created = created.json::<serde_json::Value>();
    assert_eq!(created["ShortId"], "AQ");

    let redirect = server.get("/AQ").await;
    assert_eq!(redirect.status_code(), 301);
    assert_eq!(redirect.header("location"), "http://example.com/a");
    assert_eq!(click_rx.try_recv().unwrap().short_id, "AQ");

    let stats = server
        .get(&format!("/stat/{}", created["StatId"].as_str().unwrap()))
        .await;
    stats.assert_status_ok();
    assert_eq!(stats.json::<serde_json::Value>()["ClickCount"], 0);
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (server, _click_rx) = app_server().await;

    server
        .post("/generate")
        .json(&json!({ "Url": "http://example.com/a" }))
        .await
        .assert_status_ok();

    let redirect = server.get("/AQ/").await;
    assert_eq!(redirect.status_code(), 301);

    server.get("/heart/beat/").await.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let (server, _click_rx) = app_server().await;

    assert_eq!(server.get("/missing").await.status_code(), 404);
    assert_eq!(server.get("/stat/missing").await.status_code(), 404);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (server, _click_rx) = app_server().await;

    let response = server
        .get("/heart/beat")
        .add_header("Origin", "https://elsewhere.example")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
