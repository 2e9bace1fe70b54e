//! Integration tests against a mock Nano node.
//!
//! These tests stand up a local HTTP server with wiremock and assert both
//! directions of the contract: the exact request bodies the client emits,
//! and how it resolves the node's responses (decoded, raw, non-2xx,
//! malformed).

use nano_rpc::{Error, Nano, RpcResponse};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_node() -> MockServer {
    MockServer::start().await
}

fn client_for(server: &MockServer) -> Nano {
    Nano::new(server.uri())
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn test_parameterless_action_body_is_exact() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string(r#"{"action":"block_count"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": "1000"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).block_count().await.unwrap();
    assert_eq!(response.get("count"), Some(&json!("1000")));
}

#[tokio::test]
async fn test_single_parameter_body_is_exact() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string(
            r#"{"action":"account_balance","account":"xrbWalletAddress"}"#,
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"balance": "100", "pending": "0"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .account_balance("xrbWalletAddress")
        .await
        .unwrap();
    assert_eq!(response.get("balance"), Some(&json!("100")));
}

#[tokio::test]
async fn test_optional_parameters_apply_protocol_defaults() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({
            "action": "accounts_pending",
            "accounts": ["xrb_account1", "xrb_account2"],
            "count": 4096,
            "threshold": "1000000000000000000000000",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"blocks": {}})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .accounts_pending(&["xrb_account1", "xrb_account2"], None, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_optional_parameters_can_be_overridden() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({
            "action": "chain",
            "block": "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F",
            "count": 10,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"blocks": []})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .chain(
            "000D1BAEC8EC208142C99059B393051BAC8380F9B5A2E6B2489A277D81789F3F",
            Some(10),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_command_escape_hatch() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string(
            r#"{"action":"some_future_action","flag":true}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": "1"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = serde_json::Map::new();
    params.insert("flag".to_owned(), json!(true));

    let response = client_for(&server)
        .command("some_future_action", params)
        .await
        .unwrap();
    assert_eq!(response.get("ok"), Some(&json!("1")));
}

// =============================================================================
// Decoding policy
// =============================================================================

#[tokio::test]
async fn test_decode_off_returns_exact_raw_text() {
    let raw = r#"{"count":"1000","unchecked":"10"}"#;
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(raw))
        .mount(&server)
        .await;

    let nano = Nano::builder(server.uri()).decode_responses(false).build();
    let response = nano.block_count().await.unwrap();

    // Byte-identical to what the server sent, no parse attempted.
    assert_eq!(response, RpcResponse::Raw(raw.to_owned()));

    // Feeding it through a parser externally reproduces the decoded value.
    let reparsed: serde_json::Value = serde_json::from_str(response.as_raw().unwrap()).unwrap();
    let decoded = client_for(&server).block_count().await.unwrap();
    assert_eq!(decoded.into_json().unwrap(), reparsed);
}

#[tokio::test]
async fn test_decode_off_accepts_non_json_body() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let nano = Nano::builder(server.uri()).decode_responses(false).build();
    let response = nano.version().await.unwrap();
    assert_eq!(response.as_raw(), Some("not json at all"));
}

#[tokio::test]
async fn test_malformed_json_with_success_status_is_decode_error() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).block_count().await.unwrap_err();
    assert!(err.is_decode(), "expected Decode, got {err:?}");
    assert_eq!(err.status_code(), None);
}

// =============================================================================
// Status policy
// =============================================================================

#[tokio::test]
async fn test_not_found_is_status_error() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nothing here"))
        .mount(&server)
        .await;

    let err = client_for(&server).version().await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_server_error_is_status_error_even_with_json_body() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"count": "1000"})))
        .mount(&server)
        .await;

    let err = client_for(&server).block_count().await.unwrap_err();
    match err {
        Error::Status { code, body } => {
            assert_eq!(code, 500);
            assert!(body.contains("1000"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens here; the request must fail before any response.
    let nano = Nano::new("http://127.0.0.1:1");
    let err = nano.block_count().await.unwrap_err();
    assert!(err.is_network(), "expected Network, got {err:?}");
    assert_eq!(err.status_code(), None);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn test_concurrent_calls_resolve_independently() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string(r#"{"action":"block_count"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": "42"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string(
            r#"{"action":"account_balance","account":"xrb_a"}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"balance": "7"})))
        .mount(&server)
        .await;

    let nano = client_for(&server);
    let (count, balance) = tokio::join!(nano.block_count(), nano.account_balance("xrb_a"));

    // Each call resolves with its own payload, unmixed.
    assert_eq!(count.unwrap().get("count"), Some(&json!("42")));
    assert_eq!(balance.unwrap().get("balance"), Some(&json!("7")));
}

#[tokio::test]
async fn test_clone_shares_nothing_mutable() {
    let server = mock_node().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": "1"})))
        .mount(&server)
        .await;

    let nano = client_for(&server);
    let cloned = nano.clone();
    let (a, b) = tokio::join!(nano.block_count(), cloned.block_count());
    assert!(a.is_ok() && b.is_ok());
}
