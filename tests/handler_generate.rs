mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;

use linkstat::api::handlers::generate_handler;

async fn server() -> TestServer {
    let ctx = common::create_test_state().await;
    let app = Router::new()
        .route("/generate", post(generate_handler))
        .with_state(ctx.state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_generate_success() {
    let server = server().await;

    let response = server
        .post("/generate")
        .json(&json!({ "Url": "http://example.com/a" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["FullUrl"], "http://example.com/a");
    assert_eq!(json["ShortId"], "AQ");
    assert_eq!(json["StatId"].as_str().unwrap().len(), 22);

    let expiration = json["ExpirationDate"].as_str().unwrap();
    assert!(chrono::NaiveDate::parse_from_str(expiration, "%Y-%m-%d").is_ok());
}

#[tokio::test]
async fn test_generate_assigns_sequential_short_ids() {
    let server = server().await;

    let first = server
        .post("/generate")
        .json(&json!({ "Url": "http://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/generate")
        .json(&json!({ "Url": "http://example.com/a" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["ShortId"], "AQ");
    assert_eq!(second["ShortId"], "Ag");
    assert_ne!(first["StatId"], second["StatId"]);
}

#[tokio::test]
async fn test_generate_invalid_url() {
    let server = server().await;

    let response = server
        .post("/generate")
        .json(&json!({ "Url": "not a url" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("generate short url error")
    );
    assert!(json["error"]["details"]["reason"].is_string());
}

#[tokio::test]
async fn test_generate_empty_url() {
    let server = server().await;

    let response = server.post("/generate").json(&json!({ "Url": "" })).await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_generate_url_with_newline() {
    let server = server().await;

    let response = server
        .post("/generate")
        .json(&json!({ "Url": "http://example.com/a\nb" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_generate_malformed_body() {
    let server = server().await;

    let response = server
        .post("/generate")
        .json(&json!({ "link": "http://example.com" }))
        .await;

    assert!(response.status_code().is_client_error());
}
