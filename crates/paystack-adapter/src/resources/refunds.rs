/*
[INPUT]:  Transaction references and optional partial amounts
[OUTPUT]: Refund records
[POS]:    Resource layer - /refund endpoints
[UPDATE]: When refund endpoints change
*/

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{CreateRefund, ListRefunds, Refund};
use crate::validate;

resource!(
    /// Full and partial refunds
    Refunds
);

impl<X: Transport> Refunds<'_, X> {
    /// Refund a transaction; omit `amount` to refund it in full
    ///
    /// POST /refund
    pub fn create(&self, params: &CreateRefund) -> X::Output<Refund> {
        let request = validate::optional_amount(params.amount)
            .and_then(|_| ApiRequest::post("/refund").json(params));
        self.transport.dispatch(request)
    }

    /// GET /refund?perPage=..&page=..
    pub fn list(&self, params: &ListRefunds) -> X::Output<Vec<Refund>> {
        let filters = Query::new()
            .push("transaction", params.transaction.as_deref())
            .push("currency", params.currency);
        self.transport
            .dispatch(Ok(ApiRequest::get(params.list.to_path("/refund", filters))))
    }

    /// GET /refund/{reference}
    pub fn fetch(&self, reference: &str) -> X::Output<Refund> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/refund/{}", reference))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Api;
    use crate::resources::test_support::client;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_full_refund_omits_amount() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/refund"))
            .and(body_json(json!({ "transaction": "1641" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Refund has been queued for processing",
                "data": {
                    "id": 3018284,
                    "amount": 10000,
                    "deducted_amount": 0,
                    "currency": "NGN",
                    "status": "pending"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = CreateRefund {
            transaction: "1641".to_string(),
            ..CreateRefund::default()
        };
        let response = client(&server)
            .refunds()
            .create(&params)
            .await
            .expect("refund should succeed");

        let refund = response.data.expect("data");
        assert_eq!(refund.status.as_deref(), Some("pending"));
        assert_eq!(refund.deducted_amount, Some(0));
    }
}
