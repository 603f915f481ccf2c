/*
[INPUT]:  Plan names, amounts and billing intervals
[OUTPUT]: Subscription plans
[POS]:    Resource layer - /plan endpoints
[UPDATE]: When plan endpoints change
*/

use crate::http::{ApiRequest, Query, Result, Transport};
use crate::types::{CreatePlan, ListPlans, Plan, UpdatePlan};
use crate::validate;

resource!(
    /// Recurring billing plans
    Plans
);

impl<X: Transport> Plans<'_, X> {
    /// POST /plan
    pub fn create(&self, params: &CreatePlan) -> X::Output<Plan> {
        let request = validate::amount(params.amount)
            .and_then(|_| ApiRequest::post("/plan").json(params));
        self.transport.dispatch(request)
    }

    /// Create a plan from an interval name such as `"monthly"`
    ///
    /// POST /plan
    pub fn create_named(&self, name: &str, amount: i64, interval: &str) -> X::Output<Plan> {
        self.transport.dispatch(named_plan_request(name, amount, interval))
    }

    /// GET /plan?perPage=..&page=..
    pub fn list(&self, params: &ListPlans) -> X::Output<Vec<Plan>> {
        let filters = Query::new()
            .push("status", params.status.as_deref())
            .push("interval", params.interval)
            .push("amount", params.amount);
        self.transport
            .dispatch(Ok(ApiRequest::get(params.list.to_path("/plan", filters))))
    }

    /// GET /plan/{id_or_code}
    pub fn fetch(&self, id_or_code: &str) -> X::Output<Plan> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/plan/{}", id_or_code))))
    }

    /// PUT /plan/{id_or_code}
    pub fn update(&self, id_or_code: &str, params: &UpdatePlan) -> X::Output<Plan> {
        let request = validate::optional_amount(params.amount)
            .and_then(|_| ApiRequest::put(endpoint!("/plan/{}", id_or_code)).json(params));
        self.transport.dispatch(request)
    }
}

fn named_plan_request(name: &str, amount: i64, interval: &str) -> Result<ApiRequest> {
    let interval = validate::interval(interval)?;
    validate::amount(amount)?;
    ApiRequest::post("/plan").json(&CreatePlan::new(name, amount, interval))
}
