/*
[INPUT]:  Customer emails, codes and profile fields
[OUTPUT]: Customer records and risk/authorization updates
[POS]:    Resource layer - /customer endpoints
[UPDATE]: When customer endpoints change
*/

use serde_json::{Value, json};

use crate::http::request::merge_optional;
use crate::http::{ApiRequest, Query, Transport};
use crate::types::{CreateCustomer, Customer, ListParams, RiskAction, UpdateCustomer, ValidateCustomer};

resource!(
    /// Create and manage customers
    Customers
);

impl<X: Transport> Customers<'_, X> {
    /// POST /customer
    pub fn create(&self, params: &CreateCustomer) -> X::Output<Customer> {
        self.transport
            .dispatch(ApiRequest::post("/customer").json(params))
    }

    /// GET /customer?perPage=..&page=..
    pub fn list(&self, params: &ListParams) -> X::Output<Vec<Customer>> {
        self.transport
            .dispatch(Ok(ApiRequest::get(params.to_path("/customer", Query::new()))))
    }

    /// GET /customer/{email_or_code}
    pub fn fetch(&self, email_or_code: &str) -> X::Output<Customer> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/customer/{}", email_or_code))))
    }

    /// PUT /customer/{code}
    pub fn update(&self, code: &str, params: &UpdateCustomer) -> X::Output<Customer> {
        self.transport
            .dispatch(ApiRequest::put(endpoint!("/customer/{}", code)).json(params))
    }

    /// Validate a customer's identity
    ///
    /// POST /customer/{code}/identification
    pub fn validate(&self, code: &str, params: &ValidateCustomer) -> X::Output<Value> {
        self.transport.dispatch(
            ApiRequest::post(endpoint!("/customer/{}/identification", code)).json(params),
        )
    }

    /// Whitelist or blacklist a customer
    ///
    /// POST /customer/set_risk_action
    pub fn set_risk_action(
        &self,
        customer: &str,
        risk_action: Option<RiskAction>,
    ) -> X::Output<Customer> {
        let body = merge_optional(
            json!({ "customer": customer }),
            [("risk_action", risk_action.map(|action| json!(action)))],
        );
        self.transport
            .dispatch(Ok(ApiRequest::post("/customer/set_risk_action").with_body(body)))
    }

    /// Deactivate an authorization so it can no longer be charged
    ///
    /// POST /customer/deactivate_authorization
    pub fn deactivate_authorization(&self, authorization_code: &str) -> X::Output<Value> {
        self.transport.dispatch(Ok(ApiRequest::post("/customer/deactivate_authorization")
            .with_body(json!({ "authorization_code": authorization_code }))))
    }
}
