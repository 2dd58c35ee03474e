//! Tests for the HTTP transport module

use super::*;
use crate::types::{Method, QueryParams};
use std::time::Duration;
use wiremock::matchers::{body_string, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> HttpTransport {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build();
    HttpTransport::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.base_url, "https://api.opensea.io");
    assert!(config.proxy.is_none());
    assert!(config.user_agent.starts_with("opensea-feed/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://rinkeby-api.opensea.io")
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(5))
        .proxy("http://relay.local:8080")
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://rinkeby-api.opensea.io");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.proxy.as_deref(), Some("http://relay.local:8080"));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_builder() {
    let mut query = QueryParams::new();
    query.push("limit", "50");
    let request = TransportRequest::get("/wyvern/v1/orders")
        .with_query(query)
        .header("X-Request-Id", "abc123")
        .json_body(r#"{"k":1}"#);

    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path_and_query(), "/wyvern/v1/orders?limit=50");
    assert_eq!(
        request.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(request.body.is_some());
}

#[test]
fn test_build_url_joins_base_and_query() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/")
        .build();
    let transport = HttpTransport::with_config(config).unwrap();

    let mut query = QueryParams::new();
    query.push("token_ids", "1").push("token_ids", "2");
    let request = TransportRequest::get("/api/v1/events").with_query(query);

    let url = transport.build_url(&request).unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.example.com/api/v1/events?token_ids=1&token_ids=2"
    );
}

#[tokio::test]
async fn test_get_returns_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collection/doodles"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"collection":{}}"#))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let response = transport
        .execute(TransportRequest::get("/api/v1/collection/doodles"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(&response.body[..], br#"{"collection":{}}"#);
}

#[tokio::test]
async fn test_non_success_status_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"success":false,"msg":"slow down"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let response = transport
        .execute(TransportRequest::get("/api/v1/events"))
        .await
        .unwrap();

    // Exactly one attempt: the transport never retries.
    assert_eq!(response.status, 429);
    assert!(String::from_utf8_lossy(&response.body).contains("slow down"));
}

#[tokio::test]
async fn test_query_and_request_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .and(query_param("cursor", "abc"))
        .and(query_param("only_opensea", "false"))
        .and(header("X-API-KEY", "key-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut query = QueryParams::new();
    query.push("only_opensea", "false").push("cursor", "abc");
    let request = TransportRequest::get("/api/v1/events")
        .with_query(query)
        .header("X-API-KEY", "key-1");

    let transport = transport_for(&mock_server);
    let response = transport.execute(request).await.unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_post_sets_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"side":"ask"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let request = TransportRequest::new(Method::POST, "/v2/orders").json_body(r#"{"side":"ask"}"#);

    let transport = transport_for(&mock_server);
    let response = transport.execute(request).await.unwrap();
    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/assets"))
        .and(header("X-Custom", "value"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Custom", "value")
        .build();
    let transport = HttpTransport::with_config(config).unwrap();
    let response = transport
        .execute(TransportRequest::get("/api/v1/assets"))
        .await
        .unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_proxy_receives_real_target_header() {
    let proxy_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header_exists(PROXY_TARGET_HEADER))
        .and(header(
            PROXY_TARGET_HEADER,
            "https://api.opensea.io/api/v1/collection/doodles",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&proxy_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url("https://api.opensea.io")
        .proxy(format!("{}/", proxy_server.uri()))
        .build();
    let transport = HttpTransport::with_config(config).unwrap();

    let response = transport
        .execute(TransportRequest::get("/api/v1/collection/doodles"))
        .await
        .unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build();
    let transport = HttpTransport::with_config(config).unwrap();

    let err = transport
        .execute(TransportRequest::get("/api/v1/events"))
        .await
        .unwrap_err();
    assert!(matches!(err, crate::Error::Transport(_)));
}

#[test]
fn test_http_transport_debug() {
    let transport = HttpTransport::new().unwrap();
    let debug = format!("{transport:?}");
    assert!(debug.contains("HttpTransport"));
}
