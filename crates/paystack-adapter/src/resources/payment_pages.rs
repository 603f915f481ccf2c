/*
[INPUT]:  Page names, slugs, amounts and product ids
[OUTPUT]: Hosted payment pages
[POS]:    Resource layer - /page endpoints
[UPDATE]: When payment page endpoints change
*/

use serde_json::{Value, json};

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{CreatePaymentPage, ListParams, PaymentPage, UpdatePaymentPage};
use crate::validate;

resource!(
    /// Hosted payment pages
    PaymentPages
);

impl<X: Transport> PaymentPages<'_, X> {
    /// POST /page
    pub fn create(&self, params: &CreatePaymentPage) -> X::Output<PaymentPage> {
        let request = validate::optional_amount(params.amount)
            .and_then(|_| ApiRequest::post("/page").json(params));
        self.transport.dispatch(request)
    }

    /// GET /page?perPage=..&page=..
    pub fn list(&self, params: &ListParams) -> X::Output<Vec<PaymentPage>> {
        self.transport
            .dispatch(Ok(ApiRequest::get(params.to_path("/page", Query::new()))))
    }

    /// GET /page/{id_or_slug}
    pub fn fetch(&self, id_or_slug: &str) -> X::Output<PaymentPage> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/page/{}", id_or_slug))))
    }

    /// PUT /page/{id_or_slug}
    pub fn update(&self, id_or_slug: &str, params: &UpdatePaymentPage) -> X::Output<PaymentPage> {
        let request = validate::optional_amount(params.amount)
            .and_then(|_| ApiRequest::put(endpoint!("/page/{}", id_or_slug)).json(params));
        self.transport.dispatch(request)
    }

    /// GET /page/check_slug_availability/{slug}
    pub fn check_slug_availability(&self, slug: &str) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/page/check_slug_availability/{}", slug))))
    }

    /// POST /page/{id}/product
    pub fn add_products(&self, id: i64, products: &[i64]) -> X::Output<PaymentPage> {
        self.transport.dispatch(Ok(
            ApiRequest::post(endpoint!("/page/{}/product", id)).with_body(json!({ "product": products }))
        ))
    }
}
