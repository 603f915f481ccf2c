/*
[INPUT]:  Bank/mobile money account details of payout beneficiaries
[OUTPUT]: Transfer recipients
[POS]:    Resource layer - /transferrecipient endpoints
[UPDATE]: When transfer recipient endpoints change
*/

use serde_json::{Value, json};

use crate::http::request::merge_optional;
use crate::http::{ApiRequest, Query, Result, Transport};
use crate::types::{BulkRecipients, CreateTransferRecipient, ListParams, TransferRecipient};

resource!(
    /// Beneficiaries of transfers
    TransferRecipients
);

impl<X: Transport> TransferRecipients<'_, X> {
    /// POST /transferrecipient
    pub fn create(&self, params: &CreateTransferRecipient) -> X::Output<TransferRecipient> {
        self.transport
            .dispatch(ApiRequest::post("/transferrecipient").json(params))
    }

    /// POST /transferrecipient/bulk
    pub fn bulk_create(&self, batch: &[CreateTransferRecipient]) -> X::Output<BulkRecipients> {
        self.transport.dispatch(bulk_request(batch))
    }

    /// GET /transferrecipient?perPage=..&page=..
    pub fn list(&self, params: &ListParams) -> X::Output<Vec<TransferRecipient>> {
        self.transport.dispatch(Ok(ApiRequest::get(
            params.to_path("/transferrecipient", Query::new()),
        )))
    }

    /// GET /transferrecipient/{id_or_code}
    pub fn fetch(&self, id_or_code: &str) -> X::Output<TransferRecipient> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/transferrecipient/{}", id_or_code))))
    }

    /// PUT /transferrecipient/{id_or_code}
    pub fn update(
        &self,
        id_or_code: &str,
        name: &str,
        email: Option<&str>,
    ) -> X::Output<Value> {
        let body = merge_optional(
            json!({ "name": name }),
            [("email", email.map(|email| json!(email)))],
        );
        self.transport.dispatch(Ok(
            ApiRequest::put(endpoint!("/transferrecipient/{}", id_or_code)).with_body(body)
        ))
    }

    /// DELETE /transferrecipient/{id_or_code}
    pub fn delete(&self, id_or_code: &str) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::delete(endpoint!("/transferrecipient/{}", id_or_code))))
    }
}

fn bulk_request(batch: &[CreateTransferRecipient]) -> Result<ApiRequest> {
    let batch = serde_json::to_value(batch)?;
    Ok(ApiRequest::post("/transferrecipient/bulk").with_body(json!({ "batch": batch })))
}
