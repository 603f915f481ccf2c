/*
[INPUT]:  Recipient codes, amounts, transfer codes and OTPs
[OUTPUT]: Single and bulk payouts
[POS]:    Resource layer - /transfer endpoints
[UPDATE]: When transfer endpoints change
*/

use serde_json::json;

use crate::http::request::merge_optional;
use crate::http::{ApiRequest, Query, Result, Transport};
use crate::types::{BulkTransferItem, Currency, InitiateTransfer, ListTransfers, Transfer};
use crate::validate;

resource!(
    /// Send money to transfer recipients
    Transfers
);

impl<X: Transport> Transfers<'_, X> {
    /// POST /transfer
    pub fn initiate(&self, params: &InitiateTransfer) -> X::Output<Transfer> {
        let request = validate::amount(params.amount)
            .and_then(|_| ApiRequest::post("/transfer").json(params));
        self.transport.dispatch(request)
    }

    /// Complete a transfer that is waiting on an OTP
    ///
    /// POST /transfer/finalize_transfer
    pub fn finalize(&self, transfer_code: &str, otp: &str) -> X::Output<Transfer> {
        self.transport.dispatch(Ok(ApiRequest::post("/transfer/finalize_transfer")
            .with_body(json!({ "transfer_code": transfer_code, "otp": otp }))))
    }

    /// POST /transfer/bulk
    pub fn bulk_initiate(
        &self,
        source: &str,
        transfers: &[BulkTransferItem],
        currency: Option<Currency>,
    ) -> X::Output<Vec<Transfer>> {
        self.transport
            .dispatch(bulk_request(source, transfers, currency))
    }

    /// GET /transfer?perPage=..&page=..
    pub fn list(&self, params: &ListTransfers) -> X::Output<Vec<Transfer>> {
        let filters = Query::new().push("recipient", params.recipient);
        self.transport
            .dispatch(Ok(ApiRequest::get(params.list.to_path("/transfer", filters))))
    }

    /// GET /transfer/{id_or_code}
    pub fn fetch(&self, id_or_code: &str) -> X::Output<Transfer> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/transfer/{}", id_or_code))))
    }

    /// GET /transfer/verify/{reference}
    pub fn verify(&self, reference: &str) -> X::Output<Transfer> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/transfer/verify/{}", reference))))
    }
}

fn bulk_request(
    source: &str,
    transfers: &[BulkTransferItem],
    currency: Option<Currency>,
) -> Result<ApiRequest> {
    for transfer in transfers {
        validate::amount(transfer.amount)?;
    }
    let body = merge_optional(
        json!({ "source": source, "transfers": serde_json::to_value(transfers)? }),
        [("currency", currency.map(|currency| json!(currency)))],
    );
    Ok(ApiRequest::post("/transfer/bulk").with_body(body))
}
