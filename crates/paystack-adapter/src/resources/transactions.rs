/*
[INPUT]:  Transaction parameters (amounts in subunits, references, filters)
[OUTPUT]: Initialized, verified and listed transactions
[POS]:    Resource layer - /transaction endpoints
[UPDATE]: When transaction endpoints change
*/

use serde_json::Value;

use crate::http::{ApiRequest, Query, Result, Transport};
use crate::types::{
    ChargeAuthorization, ExportLink, ExportTransactions, InitializeTransaction,
    InitializedTransaction, ListParams, ListTransactions, PartialDebit, Transaction,
};
use crate::validate;

resource!(
    /// Accept payments and look up their outcome
    Transactions
);

impl<X: Transport> Transactions<'_, X> {
    /// Initialize a transaction and get a checkout URL
    ///
    /// POST /transaction/initialize
    pub fn initialize(&self, params: &InitializeTransaction) -> X::Output<InitializedTransaction> {
        self.transport.dispatch(initialize_request(params))
    }

    /// Confirm the status of a transaction
    ///
    /// GET /transaction/verify/{reference}
    pub fn verify(&self, reference: &str) -> X::Output<Transaction> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/transaction/verify/{}", reference))))
    }

    /// GET /transaction?perPage=..&page=..
    pub fn list(&self, params: &ListTransactions) -> X::Output<Vec<Transaction>> {
        let filters = Query::new()
            .push("customer", params.customer)
            .push("terminalid", params.terminal_id.as_deref())
            .push("status", params.status)
            .push("amount", params.amount);
        self.transport
            .dispatch(Ok(ApiRequest::get(params.list.to_path("/transaction", filters))))
    }

    /// GET /transaction/{id}
    pub fn fetch(&self, id: i64) -> X::Output<Transaction> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/transaction/{}", id))))
    }

    /// Charge a reusable authorization
    ///
    /// POST /transaction/charge_authorization
    pub fn charge_authorization(&self, params: &ChargeAuthorization) -> X::Output<Transaction> {
        let request = validate::amount(params.amount)
            .and_then(|_| ApiRequest::post("/transaction/charge_authorization").json(params));
        self.transport.dispatch(request)
    }

    /// GET /transaction/timeline/{id_or_reference}
    pub fn timeline(&self, id_or_reference: &str) -> X::Output<Value> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/transaction/timeline/{}", id_or_reference))))
    }

    /// Total amount received on the integration
    ///
    /// GET /transaction/totals
    pub fn totals(&self, params: &ListParams) -> X::Output<Value> {
        self.transport.dispatch(Ok(ApiRequest::get(
            params.to_path("/transaction/totals", Query::new()),
        )))
    }

    /// GET /transaction/export
    pub fn export(&self, params: &ExportTransactions) -> X::Output<ExportLink> {
        let filters = Query::new()
            .push("customer", params.customer)
            .push("status", params.status)
            .push("currency", params.currency)
            .push("amount", params.amount)
            .push("settled", params.settled)
            .push("settlement", params.settlement)
            .push("payment_page", params.payment_page);
        self.transport.dispatch(Ok(ApiRequest::get(
            params.list.to_path("/transaction/export", filters),
        )))
    }

    /// Retrieve part of a payment from a customer
    ///
    /// POST /transaction/partial_debit
    pub fn partial_debit(&self, params: &PartialDebit) -> X::Output<Transaction> {
        self.transport.dispatch(partial_debit_request(params))
    }
}

fn initialize_request(params: &InitializeTransaction) -> Result<ApiRequest> {
    validate::amount(params.amount)?;
    validate::exclusive(
        ("split_code", params.split_code.is_some()),
        ("subaccount", params.subaccount.is_some()),
    )?;
    ApiRequest::post("/transaction/initialize").json(params)
}

fn partial_debit_request(params: &PartialDebit) -> Result<ApiRequest> {
    validate::amount(params.amount)?;
    validate::optional_amount(params.at_least)?;
    ApiRequest::post("/transaction/partial_debit").json(params)
}
