/*
[INPUT]:  Customer codes, preferred banks and split settings
[OUTPUT]: Dedicated virtual bank accounts
[POS]:    Resource layer - /dedicated_account endpoints
[UPDATE]: When dedicated account endpoints change
*/

use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::http::{ApiRequest, Query, Result, Transport};
use crate::types::{
    AssignDedicatedAccount, CreateDedicatedAccount, DedicatedAccount, DedicatedAccountProvider,
    ListDedicatedAccounts, SplitDedicatedAccount,
};
use crate::validate;

resource!(
    /// Virtual accounts customers can pay into by bank transfer
    DedicatedAccounts
);

impl<X: Transport> DedicatedAccounts<'_, X> {
    /// Create a dedicated account for an existing customer
    ///
    /// POST /dedicated_account
    pub fn create(&self, params: &CreateDedicatedAccount) -> X::Output<DedicatedAccount> {
        self.transport.dispatch(create_request(params))
    }

    /// Create a customer, validate them and assign an account in one call
    ///
    /// POST /dedicated_account/assign
    pub fn assign(&self, params: &AssignDedicatedAccount) -> X::Output<Value> {
        self.transport
            .dispatch(ApiRequest::post("/dedicated_account/assign").json(params))
    }

    /// GET /dedicated_account?active=..
    pub fn list(&self, params: &ListDedicatedAccounts) -> X::Output<Vec<DedicatedAccount>> {
        let path = Query::new()
            .push("active", Some(params.active.unwrap_or(true)))
            .push("currency", params.currency)
            .push("provider_slug", params.provider_slug.as_deref())
            .push("bank_id", params.bank_id.as_deref())
            .push("customer", params.customer.as_deref())
            .to_path("/dedicated_account");
        self.transport.dispatch(Ok(ApiRequest::get(path)))
    }

    /// GET /dedicated_account/{id}
    pub fn fetch(&self, id: i64) -> X::Output<DedicatedAccount> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/dedicated_account/{}", id))))
    }

    /// Ask the provider for transfers that have not been pushed yet
    ///
    /// GET /dedicated_account/requery
    pub fn requery(
        &self,
        account_number: &str,
        provider_slug: &str,
        date: Option<NaiveDate>,
    ) -> X::Output<Value> {
        let path = Query::new()
            .push("account_number", Some(account_number))
            .push("provider_slug", Some(provider_slug))
            .push("date", date)
            .to_path("/dedicated_account/requery");
        self.transport.dispatch(Ok(ApiRequest::get(path)))
    }

    /// DELETE /dedicated_account/{id}
    pub fn deactivate(&self, id: i64) -> X::Output<DedicatedAccount> {
        self.transport
            .dispatch(Ok(ApiRequest::delete(endpoint!("/dedicated_account/{}", id))))
    }

    /// POST /dedicated_account/split
    pub fn split(&self, params: &SplitDedicatedAccount) -> X::Output<DedicatedAccount> {
        let request = validate::exclusive(
            ("split_code", params.split_code.is_some()),
            ("subaccount", params.subaccount.is_some()),
        )
        .and_then(|_| ApiRequest::post("/dedicated_account/split").json(params));
        self.transport.dispatch(request)
    }

    /// DELETE /dedicated_account/split
    pub fn remove_split(&self, account_number: &str) -> X::Output<DedicatedAccount> {
        self.transport.dispatch(Ok(ApiRequest::delete("/dedicated_account/split")
            .with_body(json!({ "account_number": account_number }))))
    }

    /// GET /dedicated_account/available_providers
    pub fn providers(&self) -> X::Output<Vec<DedicatedAccountProvider>> {
        self.transport
            .dispatch(Ok(ApiRequest::get("/dedicated_account/available_providers")))
    }
}

fn create_request(params: &CreateDedicatedAccount) -> Result<ApiRequest> {
    validate::exclusive(
        ("split_code", params.split_code.is_some()),
        ("subaccount", params.subaccount.is_some()),
    )?;
    ApiRequest::post("/dedicated_account").json(params)
}
