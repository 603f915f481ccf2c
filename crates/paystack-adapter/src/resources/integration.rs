/*
[INPUT]:  Session timeout in seconds
[OUTPUT]: Integration-wide settings
[POS]:    Resource layer - /integration endpoints
[UPDATE]: When integration endpoints change
*/

use serde_json::json;

use crate::http::{ApiRequest, Transport};
use crate::types::PaymentSessionTimeout;

resource!(
    /// Integration settings
    Integration
);

impl<X: Transport> Integration<'_, X> {
    /// GET /integration/payment_session_timeout
    pub fn payment_session_timeout(&self) -> X::Output<PaymentSessionTimeout> {
        self.transport
            .dispatch(Ok(ApiRequest::get("/integration/payment_session_timeout")))
    }

    /// Set the session timeout; `0` disables it
    ///
    /// PUT /integration/payment_session_timeout
    pub fn update_payment_session_timeout(&self, timeout: u32) -> X::Output<PaymentSessionTimeout> {
        self.transport.dispatch(Ok(ApiRequest::put("/integration/payment_session_timeout")
            .with_body(json!({ "timeout": timeout }))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Api;
    use crate::resources::test_support::client;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_update_session_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/integration/payment_session_timeout"))
            .and(body_json(json!({ "timeout": 0 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Payment session timeout updated",
                "data": { "payment_session_timeout": 0 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .integration()
            .update_payment_session_timeout(0)
            .await
            .expect("update should succeed");

        assert_eq!(response.data.expect("data").payment_session_timeout, 0);
    }
}
