/*
[INPUT]:  Dispute ids, evidence and resolution details
[OUTPUT]: Chargeback disputes and their evidence
[POS]:    Resource layer - /dispute endpoints
[UPDATE]: When dispute endpoints change
*/

use serde_json::Value;

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{
    Dispute, DisputeEvidence, DisputeUploadUrl, ExportLink, ListDisputes, ResolveDispute,
    UpdateDispute,
};

resource!(
    /// Customer chargebacks
    Disputes
);

impl<X: Transport> Disputes<'_, X> {
    /// GET /dispute?perPage=..&page=..
    pub fn list(&self, params: &ListDisputes) -> X::Output<Vec<Dispute>> {
        self.transport
            .dispatch(Ok(ApiRequest::get(params.list.to_path("/dispute", filters(params)))))
    }

    /// GET /dispute/{id}
    pub fn fetch(&self, id: &str) -> X::Output<Dispute> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/dispute/{}", id))))
    }

    /// GET /dispute/transaction/{id}
    pub fn list_for_transaction(&self, transaction_id: &str) -> X::Output<Dispute> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/dispute/transaction/{}", transaction_id))))
    }

    /// PUT /dispute/{id}
    pub fn update(&self, id: &str, params: &UpdateDispute) -> X::Output<Dispute> {
        self.transport
            .dispatch(ApiRequest::put(endpoint!("/dispute/{}", id)).json(params))
    }

    /// POST /dispute/{id}/evidence
    pub fn add_evidence(&self, id: &str, evidence: &DisputeEvidence) -> X::Output<Value> {
        self.transport
            .dispatch(ApiRequest::post(endpoint!("/dispute/{}/evidence", id)).json(evidence))
    }

    /// Signed URL for uploading a dispute attachment
    ///
    /// GET /dispute/{id}/upload_url?upload_filename={file_name}
    pub fn upload_url(&self, id: &str, file_name: &str) -> X::Output<DisputeUploadUrl> {
        let path = Query::new()
            .push("upload_filename", Some(file_name))
            .to_path(&endpoint!("/dispute/{}/upload_url", id));
        self.transport.dispatch(Ok(ApiRequest::get(path)))
    }

    /// PUT /dispute/{id}/resolve
    pub fn resolve(&self, id: &str, params: &ResolveDispute) -> X::Output<Dispute> {
        self.transport
            .dispatch(ApiRequest::put(endpoint!("/dispute/{}/resolve", id)).json(params))
    }

    /// GET /dispute/export
    pub fn export(&self, params: &ListDisputes) -> X::Output<ExportLink> {
        self.transport.dispatch(Ok(ApiRequest::get(
            params.list.to_path("/dispute/export", filters(params)),
        )))
    }
}

fn filters(params: &ListDisputes) -> Query {
    Query::new()
        .push("transaction", params.transaction.as_deref())
        .push("status", params.status)
}
