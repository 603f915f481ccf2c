/*
[INPUT]:  Payment channel details and step-up inputs (PIN, OTP, phone, birthday, address)
[OUTPUT]: Charge attempts and their next required action
[POS]:    Resource layer - /charge endpoints
[UPDATE]: When charge endpoints change
*/

use serde_json::json;

use crate::http::{ApiRequest, Transport};
use crate::types::{ChargeResult, CreateCharge, SubmitAddress};
use crate::validate;

resource!(
    /// Direct charges through card, bank, USSD or mobile money
    Charges
);

impl<X: Transport> Charges<'_, X> {
    /// POST /charge
    pub fn create(&self, params: &CreateCharge) -> X::Output<ChargeResult> {
        let request = validate::amount(params.amount)
            .and_then(|_| ApiRequest::post("/charge").json(params));
        self.transport.dispatch(request)
    }

    /// POST /charge/submit_pin
    pub fn submit_pin(&self, pin: &str, reference: &str) -> X::Output<ChargeResult> {
        self.submit("/charge/submit_pin", "pin", pin, reference)
    }

    /// POST /charge/submit_otp
    pub fn submit_otp(&self, otp: &str, reference: &str) -> X::Output<ChargeResult> {
        self.submit("/charge/submit_otp", "otp", otp, reference)
    }

    /// POST /charge/submit_phone
    pub fn submit_phone(&self, phone: &str, reference: &str) -> X::Output<ChargeResult> {
        self.submit("/charge/submit_phone", "phone", phone, reference)
    }

    /// Birthday in `YYYY-MM-DD` form
    ///
    /// POST /charge/submit_birthday
    pub fn submit_birthday(&self, birthday: &str, reference: &str) -> X::Output<ChargeResult> {
        self.submit("/charge/submit_birthday", "birthday", birthday, reference)
    }

    /// POST /charge/submit_address
    pub fn submit_address(&self, params: &SubmitAddress) -> X::Output<ChargeResult> {
        self.transport
            .dispatch(ApiRequest::post("/charge/submit_address").json(params))
    }

    /// GET /charge/{reference}
    pub fn check_pending(&self, reference: &str) -> X::Output<ChargeResult> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/charge/{}", reference))))
    }

    fn submit(&self, path: &str, field: &str, value: &str, reference: &str) -> X::Output<ChargeResult> {
        self.transport.dispatch(Ok(
            ApiRequest::post(path).with_body(json!({ field: value, "reference": reference }))
        ))
    }
}
