//! Tests for the auth module

use super::*;
use crate::http::TransportRequest;
use crate::types::Method;

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let mut request = TransportRequest::new(Method::GET, "/api/v1/events");

    auth.apply(&mut request);
    assert!(request.headers.is_empty());
    assert!(request.query.is_empty());
}

#[test]
fn test_api_key_header() {
    let auth = Authenticator::new(AuthConfig::api_key("test-key-123"));
    let mut request = TransportRequest::new(Method::GET, "/api/v1/events");

    auth.apply(&mut request);
    assert_eq!(
        request.headers.get(DEFAULT_API_KEY_HEADER),
        Some(&"test-key-123".to_string())
    );
}

#[test]
fn test_api_key_replaces_existing_header() {
    let auth = Authenticator::new(AuthConfig::api_key("abc"));
    let mut request = TransportRequest::new(Method::GET, "/api/v1/events");
    request.query.push("limit", "50");

    auth.apply(&mut request);
    auth.apply(&mut request);
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.headers.get(DEFAULT_API_KEY_HEADER).map(String::as_str), Some("abc"));
    assert_eq!(request.query.get("limit"), Some("50"));
}

#[test]
fn test_debug_redacts_key() {
    let config = AuthConfig::api_key("super-secret");
    let printed = format!("{config:?}");
    assert!(!printed.contains("super-secret"));
    assert!(printed.contains("<redacted>"));
}

#[test]
fn test_is_configured() {
    assert!(!AuthConfig::None.is_configured());
    assert!(!AuthConfig::api_key("").is_configured());
    assert!(AuthConfig::api_key("k").is_configured());
}
