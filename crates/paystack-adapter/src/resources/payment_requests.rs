/*
[INPUT]:  Invoice details, line items and request codes
[OUTPUT]: Payment requests (invoices) and their totals
[POS]:    Resource layer - /paymentrequest endpoints
[UPDATE]: When payment request endpoints change
*/

use serde_json::{Value, json};

use crate::http::{ApiRequest, HttpMethod, Query, Result, Transport};
use crate::types::{ListPaymentRequests, PaymentRequest, PaymentRequestParams};
use crate::validate;

resource!(
    /// Invoices sent to customers
    PaymentRequests
);

impl<X: Transport> PaymentRequests<'_, X> {
    /// POST /paymentrequest
    pub fn create(&self, params: &PaymentRequestParams) -> X::Output<PaymentRequest> {
        self.transport
            .dispatch(payment_request(HttpMethod::Post, "/paymentrequest", params))
    }

    /// GET /paymentrequest?perPage=..&page=..
    pub fn list(&self, params: &ListPaymentRequests) -> X::Output<Vec<PaymentRequest>> {
        let filters = Query::new()
            .push("customer", params.customer.as_deref())
            .push("status", params.status.as_deref())
            .push("currency", params.currency)
            .push("include_archive", params.include_archive);
        self.transport
            .dispatch(Ok(ApiRequest::get(params.list.to_path("/paymentrequest", filters))))
    }

    /// GET /paymentrequest/{id_or_code}
    pub fn fetch(&self, id_or_code: &str) -> X::Output<PaymentRequest> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/paymentrequest/{}", id_or_code))))
    }

    /// GET /paymentrequest/verify/{code}
    pub fn verify(&self, code: &str) -> X::Output<PaymentRequest> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/paymentrequest/verify/{}", code))))
    }

    /// POST /paymentrequest/notify/{code}
    pub fn send_notification(&self, code: &str) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::post(endpoint!("/paymentrequest/notify/{}", code))))
    }

    /// Pending and successful totals per currency
    ///
    /// GET /paymentrequest/totals
    pub fn totals(&self) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::get("/paymentrequest/totals")))
    }

    /// Finalize a draft request
    ///
    /// POST /paymentrequest/finalize/{code}
    pub fn finalize(&self, code: &str, send_notification: bool) -> X::Output<PaymentRequest> {
        self.transport.dispatch(Ok(ApiRequest::post(endpoint!("/paymentrequest/finalize/{}", code))
            .with_body(json!({ "send_notification": send_notification }))))
    }

    /// PUT /paymentrequest/{id_or_code}
    pub fn update(
        &self,
        id_or_code: &str,
        params: &PaymentRequestParams,
    ) -> X::Output<PaymentRequest> {
        let path = endpoint!("/paymentrequest/{}", id_or_code);
        self.transport
            .dispatch(payment_request(HttpMethod::Put, &path, params))
    }

    /// POST /paymentrequest/archive/{code}
    pub fn archive(&self, code: &str) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::post(endpoint!("/paymentrequest/archive/{}", code))))
    }
}

fn payment_request(
    method: HttpMethod,
    path: &str,
    params: &PaymentRequestParams,
) -> Result<ApiRequest> {
    validate::optional_amount(params.amount)?;
    ApiRequest::new(method, path).json(params)
}
