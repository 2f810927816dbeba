//! Integration tests for the upstream forwarder.
//!
//! Each test points an `UpstreamClient` at a local mock upstream and checks
//! the normalized outcome: decoded JSON on 200, a status/message pair on
//! everything else, status 500 when no response was obtained at all.

use std::net::SocketAddr;

use gecko_gateway::config::{TimeoutConfig, UpstreamConfig};
use gecko_gateway::upstream::{QueryParams, UpstreamClient, UpstreamError};
use serde_json::json;

mod common;

fn client_for(addr: SocketAddr) -> UpstreamClient {
    let upstream = UpstreamConfig {
        base_url: format!("http://{}", addr),
        ..UpstreamConfig::default()
    };
    let timeouts = TimeoutConfig {
        connect_secs: 2,
        request_secs: 5,
    };
    UpstreamClient::new(&upstream, &timeouts).expect("client should build")
}

#[tokio::test]
async fn test_success_returns_payload_unchanged() {
    let addr = common::start_fixed_upstream(200, r#"{"data":[{"id":"eth"}]}"#).await;
    let client = client_for(addr);

    let payload = client
        .forward("/networks", &QueryParams::new())
        .await
        .expect("forward should succeed");

    assert_eq!(payload, json!({ "data": [{ "id": "eth" }] }));
}

#[tokio::test]
async fn test_rate_limit_uses_fixed_message() {
    let addr = common::start_fixed_upstream(429, "slow down").await;
    let client = client_for(addr);

    let err = client
        .forward("/networks/eth/tokens", &QueryParams::new().set("limit", 10).set("page", 1))
        .await
        .expect_err("429 should fail");

    assert!(matches!(err, UpstreamError::RateLimited));
    assert_eq!(err.status_code(), 429);
    // The upstream body must not leak through.
    assert_eq!(err.message(), "rate limit exceeded");
}

#[tokio::test]
async fn test_bad_request_passes_body_through() {
    let addr = common::start_fixed_upstream(400, "network parameter is malformed").await;
    let client = client_for(addr);

    let err = client
        .forward("/networks/bogus/dexes", &QueryParams::new())
        .await
        .expect_err("400 should fail");

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.message(), "network parameter is malformed");
}

#[tokio::test]
async fn test_unexpected_status_truncates_body() {
    let addr = common::start_mock_upstream(|_head| async {
        (503, "maintenance ".repeat(100))
    })
    .await;
    let client = client_for(addr);

    let err = client
        .forward("/networks", &QueryParams::new())
        .await
        .expect_err("503 should fail");

    assert_eq!(err.status_code(), 503);
    assert_eq!(err.message().chars().count(), 200);
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let addr = common::start_fixed_upstream(200, "<html>not json</html>").await;
    let client = client_for(addr);

    let err = client
        .forward("/networks", &QueryParams::new())
        .await
        .expect_err("non-JSON 200 should fail");

    assert!(matches!(err, UpstreamError::Decode(_)));
    assert_eq!(err.status_code(), 502);
}

#[tokio::test]
async fn test_transport_failure_maps_to_500() {
    // Bind and immediately drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let err = client
        .forward("/networks", &QueryParams::new())
        .await
        .expect_err("connection refused should fail");

    assert!(matches!(err, UpstreamError::Transport(_)));
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_forward_is_idempotent() {
    let addr = common::start_fixed_upstream(200, r#"{"data":[1,2,3]}"#).await;
    let client = client_for(addr);
    let params = QueryParams::new().set("limit", 3);

    let first = client.forward("/networks", &params).await.unwrap();
    let second = client.forward("/networks", &params).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_query_params_and_headers_on_the_wire() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    let addr = common::start_mock_upstream(move |head| {
        let tx = tx.clone();
        async move {
            let _ = tx.send(head);
            (200, "{}".to_string())
        }
    })
    .await;

    let client = client_for(addr);
    let params = QueryParams::new()
        .set("limit", 10)
        .set("page", 1)
        .set_opt("period", None::<String>);
    client
        .forward("/networks/eth/tokens", &params)
        .await
        .expect("forward should succeed");

    let head = rx.recv().await.expect("mock should capture a request").to_lowercase();
    assert!(head.starts_with("get /networks/eth/tokens?limit=10&page=1 "));
    assert!(head.contains("accept: application/json;version=20230302"));
    assert!(head.contains("user-agent: geckoterminal-api-wrapper/1.0"));
    // Absent params are omitted entirely.
    assert!(!head.contains("period"));
}
