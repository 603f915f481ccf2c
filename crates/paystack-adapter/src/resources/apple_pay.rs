/*
[INPUT]:  Top-level domain names
[OUTPUT]: Apple Pay domain registrations
[POS]:    Resource layer - /apple-pay endpoints
[UPDATE]: When Apple Pay endpoints change
*/

use serde_json::{Value, json};

use crate::http::{ApiRequest, Query, Transport};
use crate::types::ApplePayDomains;

resource!(
    /// Domains allowed to show the Apple Pay button
    ApplePay
);

impl<X: Transport> ApplePay<'_, X> {
    /// POST /apple-pay/domain
    pub fn register_domain(&self, domain_name: &str) -> X::Output<Value> {
        self.transport.dispatch(Ok(
            ApiRequest::post("/apple-pay/domain").with_body(json!({ "domainName": domain_name }))
        ))
    }

    /// List registered domains; `next`/`previous` are cursors from a prior page
    ///
    /// GET /apple-pay/domain
    pub fn list_domains(
        &self,
        use_cursor: Option<bool>,
        next: Option<&str>,
        previous: Option<&str>,
    ) -> X::Output<ApplePayDomains> {
        let path = Query::new()
            .push("use_cursor", use_cursor)
            .push("next", next)
            .push("previous", previous)
            .to_path("/apple-pay/domain");
        self.transport.dispatch(Ok(ApiRequest::get(path)))
    }

    /// DELETE /apple-pay/domain
    pub fn unregister_domain(&self, domain_name: &str) -> X::Output<Value> {
        self.transport.dispatch(Ok(
            ApiRequest::delete("/apple-pay/domain").with_body(json!({ "domainName": domain_name }))
        ))
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
    async fn test_unregister_sends_body_with_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/apple-pay/domain"))
            .and(body_json(json!({ "domainName": "example.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Domain successfully unregistered on Apple Pay"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .apple_pay()
            .unregister_domain("example.com")
            .await
            .expect("unregister should succeed");

        assert!(response.status);
    }

    #[tokio::test]
    async fn test_list_domains() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apple-pay/domain"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Apple Pay registered domains retrieved",
                "data": { "domainNames": ["example.com", "pay.example.com"] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .apple_pay()
            .list_domains(None, None, None)
            .await
            .expect("list should succeed");

        assert_eq!(response.data.expect("data").domain_names.len(), 2);
    }
}
