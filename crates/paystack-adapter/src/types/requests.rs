/*
[INPUT]:  Caller-supplied request parameters
[OUTPUT]: Typed request bodies (absent fields skipped) and list filters
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or endpoints gain parameters
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{
    AccountType, Bearer, Channel, Currency, DisputeResolution, DocumentType, Interval,
    RecipientType, RiskAction, SettlementSchedule, SplitType, TerminalEventAction,
    TerminalEventType,
};
use crate::http::Query;
use crate::http::request::paginated_path;

/// Pagination and date-range filters shared by list endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl ListParams {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Render `path?perPage=..&page=..&from=..&to=..` followed by `filters`
    pub fn to_path(&self, path: &str, filters: Query) -> String {
        Query::new()
            .push("page", Some(self.page.unwrap_or(1)))
            .push_date("from", self.from)
            .push_date("to", self.to)
            .extend(filters)
            .append_to(&paginated_path(path, self.per_page))
    }
}

// ### Transactions

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitializeTransaction {
    pub email: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<Bearer>,
}

impl InitializeTransaction {
    pub fn new(email: impl Into<String>, amount: i64) -> Self {
        Self {
            email: email.into(),
            amount,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeAuthorization {
    pub amount: i64,
    pub email: String,
    pub authorization_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<Bearer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialDebit {
    pub authorization_code: String,
    pub currency: Currency,
    pub amount: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_least: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTransactions {
    pub list: ListParams,
    pub customer: Option<i64>,
    pub terminal_id: Option<String>,
    pub status: Option<super::enums::TransactionStatus>,
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportTransactions {
    pub list: ListParams,
    pub customer: Option<i64>,
    pub status: Option<super::enums::TransactionStatus>,
    pub currency: Option<Currency>,
    pub amount: Option<i64>,
    pub settled: Option<bool>,
    pub settlement: Option<i64>,
    pub payment_page: Option<i64>,
}

// ### Customers

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomer {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl CreateCustomer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Identity details for customer validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateCustomer {
    pub first_name: String,
    pub last_name: String,
    /// Only `bank_account` is supported by the API
    #[serde(rename = "type")]
    pub identification_type: String,
    pub country: String,
    pub bvn: String,
    pub bank_code: String,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRiskAction {
    pub customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_action: Option<RiskAction>,
}

// ### Plans

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlan {
    pub name: String,
    pub amount: i64,
    pub interval: Interval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
}

impl CreatePlan {
    pub fn new(name: impl Into<String>, amount: i64, interval: Interval) -> Self {
        Self {
            name: name.into(),
            amount,
            interval,
            description: None,
            send_invoices: None,
            send_sms: None,
            currency: None,
            invoice_limit: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_existing_subscriptions: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPlans {
    pub list: ListParams,
    pub status: Option<String>,
    pub interval: Option<Interval>,
    pub amount: Option<i64>,
}

// ### Subscriptions

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscription {
    pub customer: String,
    pub plan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSubscriptions {
    pub list: ListParams,
    pub customer: Option<i64>,
    pub plan: Option<i64>,
}

// ### Products

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

// ### Payment pages

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentPage {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePaymentPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

// ### Payment requests

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequestParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_invoice: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPaymentRequests {
    pub list: ListParams,
    pub customer: Option<String>,
    pub status: Option<String>,
    pub currency: Option<Currency>,
    pub include_archive: Option<bool>,
}

// ### Transfer recipients

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferRecipient {
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl CreateTransferRecipient {
    /// Bank account recipient
    pub fn nuban(
        name: impl Into<String>,
        account_number: impl Into<String>,
        bank_code: impl Into<String>,
    ) -> Self {
        Self {
            recipient_type: RecipientType::Nuban,
            name: name.into(),
            account_number: Some(account_number.into()),
            bank_code: Some(bank_code.into()),
            description: None,
            currency: None,
            authorization_code: None,
            metadata: None,
        }
    }
}

// ### Transfers

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitiateTransfer {
    pub source: String,
    pub amount: i64,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl InitiateTransfer {
    /// Transfer from the integration balance
    pub fn from_balance(amount: i64, recipient: impl Into<String>) -> Self {
        Self {
            source: "balance".to_string(),
            amount,
            recipient: recipient.into(),
            reason: None,
            currency: None,
            reference: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkTransferItem {
    pub amount: i64,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTransfers {
    pub list: ListParams,
    pub recipient: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpReason {
    ResendOtp,
    Transfer,
}

// ### Subaccounts

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubaccount {
    pub business_name: String,
    pub settlement_bank: String,
    pub account_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage_charge: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubaccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option",
        default
    )]
    pub percentage_charge: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_schedule: Option<SettlementSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

// ### Transaction splits

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSubaccount {
    pub subaccount: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub share: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSplit {
    pub name: String,
    #[serde(rename = "type")]
    pub split_type: SplitType,
    pub currency: Currency,
    pub subaccounts: Vec<SplitSubaccount>,
    pub bearer_type: Bearer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_subaccount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSplit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_type: Option<Bearer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_subaccount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSplits {
    pub list: ListParams,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub sort_by: Option<String>,
}

// ### Settlements, refunds, disputes

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSettlements {
    pub list: ListParams,
    pub status: Option<String>,
    pub subaccount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRefund {
    pub transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRefunds {
    pub list: ListParams,
    pub transaction: Option<String>,
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDisputes {
    pub list: ListParams,
    pub transaction: Option<String>,
    pub status: Option<super::enums::DisputeStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDispute {
    pub refund_amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_filename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisputeEvidence {
    pub customer_email: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveDispute {
    pub resolution: DisputeResolution,
    pub message: String,
    pub refund_amount: i64,
    pub uploaded_filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<i64>,
}

// ### Charges

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkChargeItem {
    pub authorization: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCharge {
    pub email: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_transfer: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ussd: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_money: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitAddress {
    pub address: String,
    pub reference: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zipcode")]
    pub zip_code: String,
}

// ### Dedicated virtual accounts

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDedicatedAccount {
    pub customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignDedicatedAccount {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub preferred_bank: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bvn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDedicatedAccounts {
    /// Defaults to `true`
    pub active: Option<bool>,
    pub currency: Option<Currency>,
    pub provider_slug: Option<String>,
    pub bank_id: Option<String>,
    pub customer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitDedicatedAccount {
    pub customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_bank: Option<String>,
}

// ### Miscellaneous and verification

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBanks {
    pub country: Option<super::enums::Country>,
    pub use_cursor: Option<bool>,
    pub per_page: Option<u32>,
    pub pay_with_bank_transfer: Option<bool>,
    pub pay_with_bank: Option<bool>,
    pub enabled_for_verification: Option<bool>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub gateway: Option<String>,
    pub bank_type: Option<String>,
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateAccount {
    pub account_name: String,
    pub account_number: String,
    pub account_type: AccountType,
    pub bank_code: String,
    pub country_code: String,
    pub document_type: DocumentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
}

// ### Terminals

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalEventRequest {
    #[serde(rename = "type")]
    pub event_type: TerminalEventType,
    pub action: TerminalEventAction,
    pub data: Value,
}
