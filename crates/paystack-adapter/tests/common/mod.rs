/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for paystack-adapter tests

#![allow(dead_code)]

use paystack_adapter::{BlockingPaystackClient, ClientConfig, PaystackClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Secret key used by every test client
pub const MOCK_SECRET_KEY: &str = "sk_test_0123456789abcdef";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Async client pointed at the mock server
pub fn test_client(server: &MockServer) -> PaystackClient {
    PaystackClient::with_config(Some(MOCK_SECRET_KEY), ClientConfig::with_base_url(server.uri()))
        .expect("client should build")
}

/// Blocking client pointed at `base_url`; call from a blocking thread only
pub fn blocking_test_client(base_url: String) -> BlockingPaystackClient {
    BlockingPaystackClient::with_config(Some(MOCK_SECRET_KEY), ClientConfig::with_base_url(base_url))
        .expect("blocking client should build")
}

/// Successful envelope around `data`
pub fn success_body(message: &str, data: Value) -> Value {
    json!({ "status": true, "message": message, "data": data })
}
