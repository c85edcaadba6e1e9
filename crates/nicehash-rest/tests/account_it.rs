//! Account endpoint integration tests against a mock server

use httpmock::prelude::*;
use nicehash_rest::{ClientConfig, Credentials, NiceHashClient, RestError};

fn test_client(server: &MockServer) -> NiceHashClient {
    let credentials = Credentials::new(
        "4ebd366d-76f4-4400-a3b6-e51515d054d6",
        "fd8a1652-728b-42fe-82b8-f623e56da8850750f5bf-ce66-4ca7-8b84-93651abc723b",
        "da41b3bc-3d0b-4226-b7ea-aee73f94a518",
    );
    NiceHashClient::with_config(ClientConfig::new(credentials).with_base_url(server.base_url()))
}

#[tokio::test]
async fn get_account_decodes_balance_snapshot() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/main/api/v2/accounting/account2/BTC")
                .query_param("extendedResponse", "false");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"active":true,"currency":"BTC","totalBalance":"1.0","available":"0.9","pending":"0.1","btcRate":1.0}"#);
        })
        .await;

    let client = test_client(&server);
    let account = client.get_account("BTC", false).await.unwrap();

    mock.assert_async().await;
    assert!(account.active);
    assert_eq!(account.currency, "BTC");
    assert_eq!(account.available, "0.9");
    assert_eq!(account.total_balance, "1.0");
    assert!(account.pending_details.is_none());
}

#[tokio::test]
async fn get_account_targets_requested_currency() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/main/api/v2/accounting/account2/ETH")
                .query_param("extendedResponse", "true");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"active":true,"currency":"ETH","totalBalance":"2.0","available":"2.0","pending":"0","btcRate":0.05}"#);
        })
        .await;

    let client = test_client(&server);
    let account = client.get_account("ETH", true).await.unwrap();

    mock.assert_async().await;
    assert_eq!(account.currency, "ETH");
}

#[tokio::test]
async fn get_account_sends_all_protocol_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/main/api/v2/accounting/account2/BTC")
                .header_exists("X-Time")
                .header_exists("X-Nonce")
                .header_exists("X-Organization-Id")
                .header_exists("X-Request-Id")
                .header_exists("X-Auth")
                .header("X-Organization-Id", "da41b3bc-3d0b-4226-b7ea-aee73f94a518")
                .header("Content-Type", "application/json")
                .header("Accept", "application/json, text/csv");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"active":true,"currency":"BTC","totalBalance":"1.0","available":"0.9","pending":"0.1","btcRate":1.0}"#);
        })
        .await;

    let client = test_client(&server);
    client.get_account("BTC", false).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn get_account_surfaces_unexpected_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/main/api/v2/accounting/account2/BTC");
            then.status(401).body("unauthorized");
        })
        .await;

    let client = test_client(&server);
    let result = client.get_account("BTC", false).await;

    assert!(matches!(
        result,
        Err(RestError::UnexpectedStatus { code: 401 })
    ));
}

#[tokio::test]
async fn get_account_malformed_json_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/main/api/v2/accounting/account2/BTC");
            then.status(200)
                .header("content-type", "application/json")
                .body("{\"active\":");
        })
        .await;

    let client = test_client(&server);
    let result = client.get_account("BTC", false).await;

    assert!(matches!(result, Err(RestError::Decode(_))));
}
