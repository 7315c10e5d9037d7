//! Real-socket round trips through the explicit-client path.
//!
//! These tests exercise the full pipeline against a live local server.
//! Each test owns its server and client, so nothing here touches the
//! process-wide default client.

use jsonfetch::{HttpClient, HttpClientConfig, StatusCode};
use serde::Deserialize;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Post {
    id: u32,
    title: String,
}

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(HttpClientConfig::builder().base_url(server.uri()).build())
}

#[tokio::test]
async fn test_base_url_prefix_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": 1, "title": "Test title"})),
        )
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/api", server.uri()))
        .build();
    let client = HttpClient::new(config);

    let response = client
        .get("/posts/1")
        .accept_json()
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let post: Post = response.json().unwrap();
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "Test title");
}

#[tokio::test]
async fn test_client_default_header_wins_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("x-api-key", "client-default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .default_header("X-Api-Key", "client-default")
        .build();
    let client = HttpClient::new(config);

    // The request-level value must lose to the client default; the mock
    // only matches the client's value.
    let response = client
        .get("/secure")
        .header("X-Api-Key", "request-value")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_form_body_is_urlencoded_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("username=ada&password=s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .post("/login")
        .form(&[("username", "ada"), ("password", "s3cret")])
        .unwrap()
        .accept_json()
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_query_pairs_are_appended() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("page", "2"))
        .and(query_param("tag", "rust"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": 2, "title": "t"}])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .get("/posts")
        .query("page", "2")
        .query("tag", "rust")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let posts: Vec<Post> = response.json().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 2);
}

#[tokio::test]
async fn test_no_content_resolves_to_status_only() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.delete("/posts/1").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.body().is_none());
    assert!(response.error().is_none());
}

#[tokio::test]
async fn test_json_error_body_classified_from_live_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"Title": "Min 4 length"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .post("/posts")
        .json_bytes(&br#"{"title":""}"#[..])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = response.error().unwrap().as_json().unwrap();
    assert_eq!(error["Title"], "Min 4 length");
}

#[tokio::test]
async fn test_text_error_body_classified_from_live_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.get("/missing").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.error().unwrap().as_text(), Some("not found"));
}
