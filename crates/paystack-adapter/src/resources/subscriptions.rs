/*
[INPUT]:  Customer/plan codes, subscription codes and email tokens
[OUTPUT]: Subscriptions and their management links
[POS]:    Resource layer - /subscription endpoints
[UPDATE]: When subscription endpoints change
*/

use serde_json::{Value, json};

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{CreateSubscription, ListSubscriptions, Subscription, SubscriptionLink};

resource!(
    /// Recurring charges against a plan
    Subscriptions
);

impl<X: Transport> Subscriptions<'_, X> {
    /// POST /subscription
    pub fn create(&self, params: &CreateSubscription) -> X::Output<Subscription> {
        self.transport
            .dispatch(ApiRequest::post("/subscription").json(params))
    }

    /// GET /subscription?perPage=..&page=..
    pub fn list(&self, params: &ListSubscriptions) -> X::Output<Vec<Subscription>> {
        let filters = Query::new()
            .push("customer", params.customer)
            .push("plan", params.plan);
        self.transport
            .dispatch(Ok(ApiRequest::get(params.list.to_path("/subscription", filters))))
    }

    /// GET /subscription/{id_or_code}
    pub fn fetch(&self, id_or_code: &str) -> X::Output<Subscription> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/subscription/{}", id_or_code))))
    }

    /// POST /subscription/enable
    pub fn enable(&self, code: &str, token: &str) -> X::Output<Value> {
        self.toggle("/subscription/enable", code, token)
    }

    /// POST /subscription/disable
    pub fn disable(&self, code: &str, token: &str) -> X::Output<Value> {
        self.toggle("/subscription/disable", code, token)
    }

    /// Link the customer can use to update their card
    ///
    /// GET /subscription/{code}/manage/link
    pub fn update_link(&self, code: &str) -> X::Output<SubscriptionLink> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/subscription/{}/manage/link", code))))
    }

    /// Email the update link to the customer
    ///
    /// POST /subscription/{code}/manage/email
    pub fn send_update_link(&self, code: &str) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::post(endpoint!("/subscription/{}/manage/email", code))))
    }

    fn toggle(&self, path: &str, code: &str, token: &str) -> X::Output<Value> {
        self.transport.dispatch(Ok(
            ApiRequest::post(path).with_body(json!({ "code": code, "token": token }))
        ))
    }
}
