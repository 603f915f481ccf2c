/*
[INPUT]:  Authorization codes with amounts, batch codes
[OUTPUT]: Bulk charge batches and the charges inside them
[POS]:    Resource layer - /bulkcharge endpoints
[UPDATE]: When bulk charge endpoints change
*/

use serde_json::Value;

use crate::http::{ApiRequest, Query, Result, Transport};
use crate::types::{BulkChargeBatch, BulkChargeItem, ListParams};
use crate::validate;

resource!(
    /// Charge many authorizations in one batch
    BulkCharges
);

impl<X: Transport> BulkCharges<'_, X> {
    /// POST /bulkcharge
    pub fn initiate(&self, charges: &[BulkChargeItem]) -> X::Output<BulkChargeBatch> {
        self.transport.dispatch(initiate_request(charges))
    }

    /// GET /bulkcharge?perPage=..&page=..
    pub fn list(&self, params: &ListParams) -> X::Output<Vec<BulkChargeBatch>> {
        self.transport
            .dispatch(Ok(ApiRequest::get(params.to_path("/bulkcharge", Query::new()))))
    }

    /// GET /bulkcharge/{id_or_code}
    pub fn fetch(&self, id_or_code: &str) -> X::Output<BulkChargeBatch> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/bulkcharge/{}", id_or_code))))
    }

    /// GET /bulkcharge/{id_or_code}/charges
    pub fn fetch_charges(
        &self,
        id_or_code: &str,
        status: Option<&str>,
        params: &ListParams,
    ) -> X::Output<Vec<Value>> {
        let path = endpoint!("/bulkcharge/{}/charges", id_or_code);
        let filters = Query::new().push("status", status);
        self.transport
            .dispatch(Ok(ApiRequest::get(params.to_path(&path, filters))))
    }

    /// GET /bulkcharge/pause/{batch_code}
    pub fn pause(&self, batch_code: &str) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/bulkcharge/pause/{}", batch_code))))
    }

    /// GET /bulkcharge/resume/{batch_code}
    pub fn resume(&self, batch_code: &str) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/bulkcharge/resume/{}", batch_code))))
    }
}

fn initiate_request(charges: &[BulkChargeItem]) -> Result<ApiRequest> {
    for charge in charges {
        validate::amount(charge.amount)?;
    }
    ApiRequest::post("/bulkcharge").json(charges)
}
