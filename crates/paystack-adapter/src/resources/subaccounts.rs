/*
[INPUT]:  Settlement bank details and percentage charges
[OUTPUT]: Subaccounts for split settlement
[POS]:    Resource layer - /subaccount endpoints
[UPDATE]: When subaccount endpoints change
*/

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{CreateSubaccount, ListParams, Subaccount, UpdateSubaccount};

resource!(
    /// Accounts that receive a share of payments
    Subaccounts
);

impl<X: Transport> Subaccounts<'_, X> {
    /// POST /subaccount
    pub fn create(&self, params: &CreateSubaccount) -> X::Output<Subaccount> {
        self.transport
            .dispatch(ApiRequest::post("/subaccount").json(params))
    }

    /// GET /subaccount?perPage=..&page=..
    pub fn list(&self, params: &ListParams) -> X::Output<Vec<Subaccount>> {
        self.transport
            .dispatch(Ok(ApiRequest::get(params.to_path("/subaccount", Query::new()))))
    }

    /// GET /subaccount/{id_or_code}
    pub fn fetch(&self, id_or_code: &str) -> X::Output<Subaccount> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/subaccount/{}", id_or_code))))
    }

    /// PUT /subaccount/{id_or_code}
    pub fn update(&self, id_or_code: &str, params: &UpdateSubaccount) -> X::Output<Subaccount> {
        self.transport
            .dispatch(ApiRequest::put(endpoint!("/subaccount/{}", id_or_code)).json(params))
    }
}
