//! Tests for the CLI module

use super::*;
use crate::api::{OrderBy, OrderDirection};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::models::EventType;
use crate::pagination::Interrupted;
use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lines(out: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(out)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn client_for(server: &MockServer) -> crate::api::OpenseaClient {
    ClientConfig {
        api_key: "cli-key".into(),
        base_url: Some(server.uri()),
        ..ClientConfig::default()
    }
    .build_client()
    .unwrap()
}

// ============================================================================
// Argument Parsing Tests
// ============================================================================

#[test]
fn test_parse_events() {
    let cli = Cli::try_parse_from([
        "opensea-feed",
        "--verbose",
        "events",
        "--contract",
        "0xabc",
        "--event-type",
        "successful",
        "--after",
        "1650000000",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
        Commands::Events {
            contract,
            event_type,
            after,
            limit,
            ..
        } => {
            assert_eq!(contract.as_deref(), Some("0xabc"));
            assert_eq!(event_type, Some(EventType::Successful));
            assert_eq!(after, Some(1_650_000_000));
            assert_eq!(limit, 0);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_orders() {
    let cli = Cli::try_parse_from([
        "opensea-feed",
        "orders",
        "--token-ids",
        "1,2,3",
        "--side",
        "sell",
        "--order-by",
        "eth_price",
        "--direction",
        "asc",
        "--all",
        "--config",
        "feed.yaml",
    ])
    .unwrap();

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("feed.yaml")));
    match cli.command {
        Commands::Orders {
            token_ids,
            side,
            order_by,
            direction,
            all,
            ..
        } => {
            assert_eq!(token_ids, vec!["1", "2", "3"]);
            assert_eq!(side, Some(SideArg::Sell));
            assert_eq!(order_by, OrderBy::EthPrice);
            assert_eq!(direction, OrderDirection::Asc);
            assert!(all);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_bad_direction() {
    let result = Cli::try_parse_from(["opensea-feed", "orders", "--direction", "up"]);
    assert!(result.is_err());
}

#[test]
fn test_listings_requires_token_ids() {
    let result = Cli::try_parse_from(["opensea-feed", "listings", "0xabc"]);
    assert!(result.is_err());
}

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn test_write_records_json_lines() {
    let mut out = Vec::new();
    let written = write_records(&mut out, &[json!({"a": 1}), json!({"b": 2})]).unwrap();
    assert_eq!(written, 2);
    assert_eq!(lines(&out), vec![json!({"a": 1}), json!({"b": 2})]);
}

#[test]
fn test_write_retrieval_keeps_partial_records() {
    let mut out = Vec::new();
    let retrieval = Err(Interrupted {
        records: vec![json!({"id": 1})],
        error: Error::Cancelled,
    });

    let err = write_retrieval(&mut out, retrieval).unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(lines(&out), vec![json!({"id": 1})]);
}

// ============================================================================
// Execution Tests
// ============================================================================

#[tokio::test]
async fn test_execute_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/collection/doodles-official"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection": {"slug": "doodles-official", "name": "Doodles"}
        })))
        .mount(&server)
        .await;

    let cli = Cli::try_parse_from(["opensea-feed", "collection", "doodles-official"]).unwrap();
    let runner = Runner::new(cli);
    let mut out = Vec::new();

    runner
        .execute(&client_for(&server), &CancellationToken::new(), &mut out)
        .await
        .unwrap();

    let records = lines(&out);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["slug"], "doodles-official");
}

#[tokio::test]
async fn test_execute_events_writes_partial_then_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .and(query_param("cursor", "p2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": "p2",
            "asset_events": [{"id": 1}, {"id": 2}]
        })))
        .mount(&server)
        .await;

    let cli = Cli::try_parse_from(["opensea-feed", "events"]).unwrap();
    let mut out = Vec::new();

    let err = Runner::new(cli)
        .execute(&client_for(&server), &CancellationToken::new(), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnstructuredApi { status: 500, .. }));
    assert_eq!(lines(&out).len(), 2);
}
