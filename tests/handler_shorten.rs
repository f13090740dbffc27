mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sniplink::api::handlers::shorten_handler;

fn test_server() -> (TestServer, std::sync::Arc<sniplink::prelude::MemoryLinkRepository>) {
    let (state, repository) = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repository)
}

#[tokio::test]
async fn test_shorten_success() {
    let (server, _repository) = test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();

    assert_eq!(code.len(), 8);
    assert_eq!(json["original_url"], "https://example.com/page");
    assert_eq!(json["clicks"], 0);
    assert_eq!(
        json["short_url"],
        format!("{}/{}", common::BASE_URL, code)
    );
    assert!(json["created_at"].is_string());
    assert!(json.get("last_clicked").is_none());
}

#[tokio::test]
async fn test_shorten_resubmission_returns_existing_link() {
    let (server, _repository) = test_server();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;
    second.assert_status_ok();

    let first = first.json::<serde_json::Value>();
    let second = second.json::<serde_json::Value>();
    assert_eq!(first["short_code"], second["short_code"]);
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_distinct_codes() {
    let (server, _repository) = test_server();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/1" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/2" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["short_code"], second["short_code"]);
}

#[tokio::test]
async fn test_shorten_coerces_missing_scheme() {
    let (server, _repository) = test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "example.com/some/page" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "http://example.com/some/page");
}

#[tokio::test]
async fn test_shorten_normalizes_url() {
    let (server, _repository) = test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "HTTPS://EXAMPLE.COM:443/Path#section" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/Path");
}

#[tokio::test]
async fn test_shorten_rejects_unsupported_scheme() {
    let (server, _repository) = test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "javascript:alert(1)" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_shorten_rejects_empty_url() {
    let (server, _repository) = test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_oversized_url() {
    let (server, _repository) = test_server();

    let long_url = format!("https://example.com/{}", "a".repeat(500));
    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": long_url }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_missing_url_field() {
    let (server, _repository) = test_server();

    let response = server.post("/api/shorten").json(&json!({})).await;

    assert!(response.status_code().is_client_error());
}
