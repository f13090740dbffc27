mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sniplink::api::handlers::links_handler;

fn test_server() -> (TestServer, std::sync::Arc<sniplink::prelude::MemoryLinkRepository>) {
    let (state, repository) = common::create_test_state();
    let app = Router::new()
        .route("/api/links", get(links_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repository)
}

#[tokio::test]
async fn test_links_empty_store() {
    let (server, _repository) = test_server();

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["pagination"]["total_items"], 0);
    assert_eq!(json["pagination"]["total_pages"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_links_newest_first() {
    let (server, repository) = test_server();

    for i in 0..3 {
        common::create_test_link(
            &repository,
            &format!("code000{i}"),
            &format!("https://example.com/{i}"),
        )
        .await;
    }

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["short_code"], "code0002");
    assert_eq!(items[2]["short_code"], "code0000");
}

#[tokio::test]
async fn test_links_default_page_size_is_ten() {
    let (server, repository) = test_server();

    for i in 0..12 {
        common::create_test_link(
            &repository,
            &format!("code{i:04}"),
            &format!("https://example.com/{i}"),
        )
        .await;
    }

    let response = server.get("/api/links").await;
    let json = response.json::<serde_json::Value>();

    assert_eq!(json["items"].as_array().unwrap().len(), 10);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["page_size"], 10);
    assert_eq!(json["pagination"]["total_items"], 12);
    assert_eq!(json["pagination"]["total_pages"], 2);
}

#[tokio::test]
async fn test_links_second_page_has_remainder() {
    let (server, repository) = test_server();

    for i in 0..12 {
        common::create_test_link(
            &repository,
            &format!("code{i:04}"),
            &format!("https://example.com/{i}"),
        )
        .await;
    }

    let response = server.get("/api/links").add_query_param("page", "2").await;
    let json = response.json::<serde_json::Value>();

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["short_code"], "code0000");
}

#[tokio::test]
async fn test_links_rejects_invalid_page_size() {
    let (server, _repository) = test_server();

    let response = server
        .get("/api/links")
        .add_query_param("page_size", "0")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string());
}
