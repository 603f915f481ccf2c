/*
[INPUT]:  Split names, subaccount shares and bearer settings
[OUTPUT]: Transaction splits
[POS]:    Resource layer - /split endpoints
[UPDATE]: When split endpoints change
*/

use serde_json::{Value, json};

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{CreateSplit, ListSplits, SplitSubaccount, TransactionSplit, UpdateSplit};

resource!(
    /// Split a payment between the main account and subaccounts
    TransactionSplits
);

impl<X: Transport> TransactionSplits<'_, X> {
    /// POST /split
    pub fn create(&self, params: &CreateSplit) -> X::Output<TransactionSplit> {
        self.transport.dispatch(ApiRequest::post("/split").json(params))
    }

    /// GET /split?perPage=..&page=..
    pub fn list(&self, params: &ListSplits) -> X::Output<Vec<TransactionSplit>> {
        let filters = Query::new()
            .push("name", params.name.as_deref())
            .push("active", params.active)
            .push("sort_by", params.sort_by.as_deref());
        self.transport
            .dispatch(Ok(ApiRequest::get(params.list.to_path("/split", filters))))
    }

    /// GET /split/{id}
    pub fn fetch(&self, id: &str) -> X::Output<TransactionSplit> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/split/{}", id))))
    }

    /// PUT /split/{id}
    pub fn update(&self, id: &str, params: &UpdateSplit) -> X::Output<TransactionSplit> {
        self.transport
            .dispatch(ApiRequest::put(endpoint!("/split/{}", id)).json(params))
    }

    /// Add a subaccount to the split or change its share
    ///
    /// POST /split/{id}/subaccount/add
    pub fn add_or_update_subaccount(
        &self,
        id: &str,
        share: &SplitSubaccount,
    ) -> X::Output<TransactionSplit> {
        self.transport
            .dispatch(ApiRequest::post(endpoint!("/split/{}/subaccount/add", id)).json(share))
    }

    /// POST /split/{id}/subaccount/remove
    pub fn remove_subaccount(&self, id: &str, subaccount: &str) -> X::Output<Value> {
        self.transport.dispatch(Ok(ApiRequest::post(endpoint!("/split/{}/subaccount/remove", id))
            .with_body(json!({ "subaccount": subaccount }))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Api;
    use crate::resources::test_support::client;
    use crate::types::{Bearer, Currency, SplitType};
    use rust_decimal::Decimal;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_split() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/split"))
            .and(body_json(json!({
                "name": "Percentage Split",
                "type": "percentage",
                "currency": "NGN",
                "subaccounts": [
                    { "subaccount": "ACCT_z3x6z3nbo14xsil", "share": 20.0 },
                    { "subaccount": "ACCT_pwwualwty4nhq9d", "share": 30.5 }
                ],
                "bearer_type": "subaccount",
                "bearer_subaccount": "ACCT_hdl8abxl8drhrl3"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Split created",
                "data": {
                    "id": 142,
                    "split_code": "SPL_e7jnRLtzla",
                    "type": "percentage",
                    "subaccounts": [
                        { "subaccount": { "id": 12700 }, "share": 20 },
                        { "subaccount": { "id": 12701 }, "share": 30.5 }
                    ]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = CreateSplit {
            name: "Percentage Split".to_string(),
            split_type: SplitType::Percentage,
            currency: Currency::Ngn,
            subaccounts: vec![
                SplitSubaccount {
                    subaccount: "ACCT_z3x6z3nbo14xsil".to_string(),
                    share: Decimal::new(20, 0),
                },
                SplitSubaccount {
                    subaccount: "ACCT_pwwualwty4nhq9d".to_string(),
                    share: Decimal::new(305, 1),
                },
            ],
            bearer_type: Bearer::Subaccount,
            bearer_subaccount: Some("ACCT_hdl8abxl8drhrl3".to_string()),
        };
        let response = client(&server)
            .transaction_splits()
            .create(&params)
            .await
            .expect("create should succeed");

        let split = response.data.expect("data");
        assert_eq!(split.split_code.as_deref(), Some("SPL_e7jnRLtzla"));
        assert_eq!(split.subaccounts[1].share, Some(Decimal::new(305, 1)));
    }

    #[tokio::test]
    async fn test_list_keeps_false_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/split"))
            .and(query_param("active", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Split retrieved",
                "data": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = ListSplits {
            active: Some(false),
            ..ListSplits::default()
        };
        let response = client(&server)
            .transaction_splits()
            .list(&params)
            .await
            .expect("list should succeed");

        assert!(response.status);
    }
}
