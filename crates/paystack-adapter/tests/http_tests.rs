/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the async and blocking clients
[POS]:    Integration tests - transport and envelope behavior
[UPDATE]: When transport or envelope rules change
*/

mod common;

use common::{MOCK_SECRET_KEY, blocking_test_client, setup_mock_server, success_body, test_client};
use paystack_adapter::{
    ApiRequest, ClientConfig, PaystackClient, PaystackError, SecretKey, Transport,
};
use serde_json::{Value, json};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(PaystackClient::new(Some(MOCK_SECRET_KEY)));
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Some(std::time::Duration::from_secs(30)),
        ..ClientConfig::default()
    };
    let client = assert_ok!(PaystackClient::with_config(Some(MOCK_SECRET_KEY), config));
    assert_eq!(client.base_url(), "https://api.paystack.co");
}

#[test]
fn test_missing_secret_key_is_config_error() {
    let err = SecretKey::resolve_with(None, |_| None).expect_err("no key anywhere");
    assert!(matches!(err, PaystackError::Config(_)));
}

#[tokio::test]
async fn test_sends_fixed_headers() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/bank"))
        .and(header("authorization", format!("Bearer {MOCK_SECRET_KEY}").as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Banks retrieved", json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .execute::<Value>(ApiRequest::get("/bank"))
        .await
        .expect("request should succeed");

    assert!(response.status);
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_success_envelope() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/customer/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("OK", json!({ "id": 1 }))))
        .mount(&server)
        .await;

    let response = test_client(&server)
        .execute::<Value>(ApiRequest::get("/customer/1"))
        .await
        .expect("request should succeed");

    assert!(response.status);
    assert_eq!(response.message, "OK");
    assert_eq!(response.data, Some(json!({ "id": 1 })));
    assert!(response.is_success());
}

#[tokio::test]
async fn test_failure_envelope_is_data() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/customer"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": false,
            "message": "Bad",
            "errors": { "field": "required" }
        })))
        .mount(&server)
        .await;

    let response = test_client(&server)
        .execute::<Value>(ApiRequest::post("/customer").with_body(json!({})))
        .await
        .expect("4xx is not an error");

    assert!(!response.status);
    assert_eq!(response.status_code, 400);
    assert_eq!(response.message, "Bad");
    assert_eq!(response.data, Some(json!({ "field": "required" })));
}

#[tokio::test]
async fn test_non_json_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/transaction/totals"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let response = test_client(&server)
        .execute::<Value>(ApiRequest::get("/transaction/totals"))
        .await
        .expect("unparseable body is not an error");

    assert!(!response.status);
    assert_eq!(response.status_code, 502);
    assert_eq!(response.message, "Could not parse response body");
    assert_eq!(
        response.unparsed_body.as_deref(),
        Some("<html>Bad Gateway</html>".as_bytes())
    );
}

#[tokio::test]
async fn test_json_body_is_forwarded() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/integration/payment_session_timeout"))
        .and(body_json(json!({ "timeout": 30 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(
            "Payment session timeout updated",
            json!({ "payment_session_timeout": 30 }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server)
        .execute::<Value>(
            ApiRequest::put("/integration/payment_session_timeout").with_body(json!({ "timeout": 30 })),
        )
        .await
        .expect("request should succeed");

    assert_eq!(response.data, Some(json!({ "payment_session_timeout": 30 })));
}

#[tokio::test]
async fn test_unsupported_method_never_reaches_network() {
    let server = setup_mock_server().await;
    Mock::given(method("TRACE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .dispatch::<Value>(ApiRequest::from_method_name("TRACE", "/bank"))
        .await
        .expect_err("unsupported method");

    assert!(matches!(err, PaystackError::UnsupportedMethod(ref name) if name == "TRACE"));
    assert!(err.is_usage_error());
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let client = PaystackClient::with_config(
        Some(MOCK_SECRET_KEY),
        ClientConfig::with_base_url("http://127.0.0.1:9"),
    )
    .expect("client should build");

    let err = client
        .execute::<Value>(ApiRequest::get("/bank"))
        .await
        .expect_err("nothing listens on port 9");

    assert!(matches!(err, PaystackError::Http(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_client_round_trip() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/country"))
        .and(header("authorization", format!("Bearer {MOCK_SECRET_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(
            "Countries retrieved",
            json!([{ "id": 1, "name": "Nigeria", "iso_code": "NG" }]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let response = tokio::task::spawn_blocking(move || {
        let client = blocking_test_client(base_url);
        client.execute::<Value>(ApiRequest::get("/country"))
    })
    .await
    .expect("blocking task should join")
    .expect("request should succeed");

    assert!(response.status);
    assert_eq!(response.data.expect("data")[0]["iso_code"], "NG");
}
