/*
[INPUT]:  Settlement ids and list filters
[OUTPUT]: Payouts to the integration's bank account
[POS]:    Resource layer - /settlement endpoints
[UPDATE]: When settlement endpoints change
*/

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{ListParams, ListSettlements, Settlement, Transaction};

resource!(
    /// Settlements made to the integration
    Settlements
);

impl<X: Transport> Settlements<'_, X> {
    /// GET /settlement?perPage=..&page=..
    pub fn list(&self, params: &ListSettlements) -> X::Output<Vec<Settlement>> {
        let filters = Query::new()
            .push("status", params.status.as_deref())
            .push("subaccount", params.subaccount.as_deref());
        self.transport
            .dispatch(Ok(ApiRequest::get(params.list.to_path("/settlement", filters))))
    }

    /// Transactions that make up a settlement
    ///
    /// GET /settlement/{id}/transactions
    pub fn transactions(&self, id: &str, params: &ListParams) -> X::Output<Vec<Transaction>> {
        let path = endpoint!("/settlement/{}/transactions", id);
        self.transport
            .dispatch(Ok(ApiRequest::get(params.to_path(&path, Query::new()))))
    }
}
