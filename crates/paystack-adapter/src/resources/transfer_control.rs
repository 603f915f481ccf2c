/*
[INPUT]:  Transfer codes and OTPs
[OUTPUT]: Balances, ledger entries and OTP settings for transfers
[POS]:    Resource layer - /balance and /transfer OTP endpoints
[UPDATE]: When transfer control endpoints change
*/

use serde_json::{Value, json};

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{Balance, ListParams, OtpReason};

resource!(
    /// Integration balance and transfer OTP settings
    TransferControl
);

impl<X: Transport> TransferControl<'_, X> {
    /// Available balance per currency
    ///
    /// GET /balance
    pub fn balance(&self) -> X::Output<Vec<Balance>> {
        self.transport.dispatch(Ok(ApiRequest::get("/balance")))
    }

    /// GET /balance/ledger?perPage=..&page=..
    pub fn balance_ledger(&self, params: &ListParams) -> X::Output<Vec<Value>> {
        self.transport
            .dispatch(Ok(ApiRequest::get(params.to_path("/balance/ledger", Query::new()))))
    }

    /// POST /transfer/resend_otp
    pub fn resend_otp(&self, transfer_code: &str, reason: OtpReason) -> X::Output<Value> {
        self.transport.dispatch(Ok(ApiRequest::post("/transfer/resend_otp")
            .with_body(json!({ "transfer_code": transfer_code, "reason": reason }))))
    }

    /// Start disabling OTP for transfers; an OTP is sent to the business phone
    ///
    /// POST /transfer/disable_otp
    pub fn disable_otp(&self) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::post("/transfer/disable_otp")))
    }

    /// POST /transfer/disable_otp_finalize
    pub fn finalize_disable_otp(&self, otp: &str) -> X::Output<Value> {
        self.transport.dispatch(Ok(
            ApiRequest::post("/transfer/disable_otp_finalize").with_body(json!({ "otp": otp }))
        ))
    }

    /// POST /transfer/enable_otp
    pub fn enable_otp(&self) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::post("/transfer/enable_otp")))
    }
}
