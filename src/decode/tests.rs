//! Tests for the response envelope decoder

use super::*;
use crate::error::Error;
use crate::http::TransportResponse;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Success Bodies
// ============================================================================

#[test]
fn test_events_page_decodes() {
    let body = br#"{
        "next": "LWV2ZW50X3RpbWVzdGFtcA==",
        "previous": null,
        "asset_events": [{"id": 1, "event_type": "transfer"}, {"id": 2}]
    }"#;

    let page: EventsPage = decode_envelope(200, body).unwrap();
    assert_eq!(page.asset_events.len(), 2);

    let page = page.into_page();
    assert_eq!(page.next_cursor.as_deref(), Some("LWV2ZW50X3RpbWVzdGFtcA=="));
    assert_eq!(page.records[0].id, 1);
    assert_eq!(page.records[1].id, 2);
}

#[test]
fn test_empty_cursor_becomes_none() {
    let page: EventsPage = decode_envelope(200, br#"{"next": "", "asset_events": []}"#).unwrap();
    assert!(page.into_page().next_cursor.is_none());

    let page: OrdersV2Page = decode_envelope(200, br#"{"orders": []}"#).unwrap();
    assert!(page.into_page().next_cursor.is_none());
}

#[test]
fn test_orders_page_ignores_count_for_paging() {
    let page: OrdersPage =
        decode_envelope(200, br#"{"count": 1000, "orders": [{"id": 5}]}"#).unwrap();
    assert_eq!(page.count, 1000);

    let page = page.into_page();
    assert_eq!(page.len(), 1);
    assert!(page.next_cursor.is_none());
}

#[test]
fn test_listings_page_keeps_both_lists() {
    let page: ListingsPage = decode_envelope(
        200,
        br#"{"listings": [{"id": 1}], "seaport_listings": [{"order_hash": "0x01"}]}"#,
    )
    .unwrap();
    assert_eq!(page.seaport_listings.len(), 1);
    assert_eq!(page.into_page().records[0].id, 1);
}

#[test]
fn test_single_collection_decodes() {
    let wrapper: SingleCollection =
        decode_envelope(200, br#"{"collection": {"slug": "doodles-official"}}"#).unwrap();
    assert_eq!(wrapper.collection.collection.slug, "doodles-official");
}

#[test]
fn test_missing_list_is_malformed() {
    let err = decode_envelope::<EventsPage>(200, br#"{"next": "abc"}"#).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_non_json_success_is_malformed() {
    let err = decode_envelope::<OrdersPage>(200, b"<html>oops</html>").unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_bad_scalar_inside_record_is_malformed() {
    let body = br#"{"asset_events": [{"id": 1, "contract_address": "0xnothex"}]}"#;
    let err = decode_envelope::<EventsPage>(200, body).unwrap_err();
    match err {
        Error::MalformedResponse { message } => assert!(message.contains("Invalid address")),
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Error Bodies
// ============================================================================

#[test]
fn test_structured_error_is_api_error() {
    let err =
        decode_envelope::<EventsPage>(429, br#"{"success": false, "msg": "rate limited"}"#)
            .unwrap_err();
    assert!(matches!(err, Error::Api { ref message } if message == "rate limited"));
}

#[test]
fn test_contradictory_success_uses_status_text() {
    let err = decode_envelope::<EventsPage>(403, br#"{"success": true, "msg": "fine"}"#)
        .unwrap_err();
    assert!(matches!(err, Error::Api { ref message } if message == "403 Forbidden"));
}

#[test_case(br#"Internal Server Error"# ; "plain text")]
#[test_case(br#"{"detail": "Not found"}"# ; "other json shape")]
#[test_case(br#"{"success": false}"# ; "missing msg")]
#[test_case(br#"{"msg": "x"}"# ; "missing success")]
#[test_case(b"" ; "empty body")]
fn test_unstructured_error(body: &[u8]) {
    let err = decode_envelope::<EventsPage>(500, body).unwrap_err();
    match err {
        Error::UnstructuredApi { status, body: raw } => {
            assert_eq!(status, 500);
            assert_eq!(raw.as_bytes(), body);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_200_success_status_is_still_error() {
    // Only 200 counts as success.
    let err = decode_envelope::<EventsPage>(201, br#"{"asset_events": []}"#).unwrap_err();
    assert!(matches!(err, Error::UnstructuredApi { status: 201, .. }));
}

#[test]
fn test_decode_response_uses_status() {
    let response = TransportResponse::new(400, r#"{"success": false, "msg": "bad cursor"}"#);
    let err = decode_response::<EventsPage>(&response).unwrap_err();
    assert!(err.is_api_error());
}

#[test_case(403, "403 Forbidden")]
#[test_case(404, "404 Not Found")]
#[test_case(429, "429 Too Many Requests")]
#[test_case(599, "599")]
fn test_status_text(status: u16, expected: &str) {
    assert_eq!(status_text(status), expected);
}
