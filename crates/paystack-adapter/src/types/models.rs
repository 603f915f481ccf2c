/*
[INPUT]:  `data` payloads of Paystack API responses
[OUTPUT]: Typed Rust records used as default response models
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new records are returned
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::Interval;
use super::serde_helpers;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Authorization {
    pub authorization_code: Option<String>,
    pub bin: Option<String>,
    pub last4: Option<String>,
    pub exp_month: Option<String>,
    pub exp_year: Option<String>,
    pub channel: Option<String>,
    pub card_type: Option<String>,
    pub bank: Option<String>,
    pub country_code: Option<String>,
    pub brand: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_bool")]
    pub reusable: Option<bool>,
    pub signature: Option<String>,
    pub account_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: i64,
    pub customer_code: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub metadata: Option<Value>,
    pub risk_action: Option<String>,
    pub international_format_phone: Option<String>,
    pub identified: Option<bool>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub authorizations: Vec<Authorization>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub subscriptions: Vec<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitializedTransaction {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: i64,
    pub domain: Option<String>,
    pub status: Option<String>,
    pub reference: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub requested_amount: Option<i64>,
    pub message: Option<String>,
    pub gateway_response: Option<String>,
    pub paid_at: Option<String>,
    pub created_at: Option<String>,
    pub channel: Option<String>,
    pub currency: Option<String>,
    pub ip_address: Option<String>,
    pub metadata: Option<Value>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub fees: Option<i64>,
    pub customer: Option<Customer>,
    pub authorization: Option<Authorization>,
    pub plan: Option<Value>,
    pub split: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportLink {
    pub path: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub id: i64,
    pub name: Option<String>,
    pub plan_code: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub amount: Option<i64>,
    pub interval: Option<Interval>,
    pub send_invoices: Option<bool>,
    pub send_sms: Option<bool>,
    pub currency: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub invoice_limit: Option<i64>,
    pub hosted_page: Option<bool>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub subscriptions: Vec<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub id: i64,
    pub subscription_code: Option<String>,
    pub email_token: Option<String>,
    pub status: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub amount: Option<i64>,
    pub quantity: Option<i64>,
    pub cron_expression: Option<String>,
    pub next_payment_date: Option<String>,
    pub open_invoice: Option<Value>,
    pub customer: Option<Value>,
    pub plan: Option<Value>,
    pub authorization: Option<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionLink {
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub product_code: Option<String>,
    pub slug: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub price: Option<i64>,
    pub currency: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub quantity: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub quantity_sold: Option<i64>,
    pub unlimited: Option<bool>,
    pub active: Option<bool>,
    pub in_stock: Option<bool>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentPage {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub active: Option<bool>,
    pub published: Option<bool>,
    pub redirect_url: Option<String>,
    pub custom_fields: Option<Value>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub products: Vec<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    pub id: i64,
    pub request_code: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub due_date: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub paid: Option<bool>,
    pub paid_at: Option<String>,
    pub offline_reference: Option<String>,
    pub has_invoice: Option<bool>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub invoice_number: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub line_items: Vec<Value>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub tax: Vec<Value>,
    pub customer: Option<Value>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferRecipient {
    pub id: i64,
    pub recipient_code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub recipient_type: Option<String>,
    pub currency: Option<String>,
    pub active: Option<bool>,
    pub email: Option<String>,
    pub details: Option<Value>,
    pub metadata: Option<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkRecipients {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub success: Vec<TransferRecipient>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub errors: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    pub id: i64,
    pub transfer_code: Option<String>,
    pub reference: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub reason: Option<String>,
    pub source: Option<String>,
    pub recipient: Option<Value>,
    pub failures: Option<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    pub currency: String,
    pub balance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subaccount {
    pub id: i64,
    pub subaccount_code: Option<String>,
    pub business_name: Option<String>,
    pub description: Option<String>,
    pub settlement_bank: Option<String>,
    pub account_number: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub percentage_charge: Option<Decimal>,
    pub settlement_schedule: Option<String>,
    pub active: Option<bool>,
    pub is_verified: Option<bool>,
    pub currency: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub metadata: Option<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitShare {
    pub subaccount: Option<Value>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub share: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionSplit {
    pub id: i64,
    pub name: Option<String>,
    pub split_code: Option<String>,
    #[serde(rename = "type")]
    pub split_type: Option<String>,
    pub currency: Option<String>,
    pub active: Option<bool>,
    pub bearer_type: Option<String>,
    pub bearer_subaccount: Option<Value>,
    pub total_subaccounts: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub subaccounts: Vec<SplitShare>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settlement {
    pub id: i64,
    pub domain: Option<String>,
    pub status: Option<String>,
    pub currency: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub total_amount: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub effective_amount: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub total_fees: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub total_processed: Option<i64>,
    pub settlement_date: Option<String>,
    pub settled_by: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Refund {
    pub id: i64,
    pub transaction: Option<Value>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub deducted_amount: Option<i64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub refunded_by: Option<String>,
    pub refunded_at: Option<String>,
    pub expected_at: Option<String>,
    pub customer_note: Option<String>,
    pub merchant_note: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dispute {
    pub id: i64,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub refund_amount: Option<i64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub resolution: Option<String>,
    pub domain: Option<String>,
    pub category: Option<String>,
    pub transaction: Option<Value>,
    pub customer: Option<Value>,
    pub bin: Option<String>,
    pub last4: Option<String>,
    #[serde(rename = "dueAt")]
    pub due_at: Option<String>,
    #[serde(rename = "resolvedAt")]
    pub resolved_at: Option<String>,
    pub evidence: Option<Value>,
    pub attachments: Option<Value>,
    pub note: Option<Value>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub history: Vec<Value>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub messages: Vec<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputeUploadUrl {
    #[serde(rename = "signedUrl")]
    pub signed_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkChargeBatch {
    pub id: i64,
    pub batch_code: Option<String>,
    pub reference: Option<String>,
    pub status: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub total_charges: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub pending_charges: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeResult {
    pub id: Option<i64>,
    pub reference: Option<String>,
    pub status: Option<String>,
    pub display_text: Option<String>,
    pub message: Option<String>,
    pub gateway_response: Option<String>,
    pub url: Option<String>,
    pub ussd_code: Option<String>,
    #[serde(deserialize_with = "serde_helpers::lenient_i64")]
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bank {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub code: Option<String>,
    pub longcode: Option<String>,
    pub gateway: Option<String>,
    pub pay_with_bank: Option<bool>,
    pub active: Option<bool>,
    pub country: Option<String>,
    pub currency: Option<String>,
    #[serde(rename = "type")]
    pub bank_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedCountry {
    pub id: i64,
    pub name: Option<String>,
    pub iso_code: Option<String>,
    pub default_currency_code: Option<String>,
    pub integration_defaults: Option<Value>,
    pub relationships: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountResolution {
    pub account_number: String,
    pub account_name: String,
    pub bank_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountValidation {
    pub verified: bool,
    #[serde(rename = "verificationMessage")]
    pub verification_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardBin {
    pub bin: Option<String>,
    pub brand: Option<String>,
    pub sub_brand: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub card_type: Option<String>,
    pub bank: Option<String>,
    pub linked_bank_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedicatedAccount {
    pub id: i64,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub assigned: Option<bool>,
    pub currency: Option<String>,
    pub active: Option<bool>,
    pub bank: Option<Value>,
    pub customer: Option<Value>,
    pub assignment: Option<Value>,
    pub split_config: Option<Value>,
    pub metadata: Option<Value>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedicatedAccountProvider {
    pub id: i64,
    pub provider_slug: Option<String>,
    pub bank_id: Option<i64>,
    pub bank_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Terminal {
    pub id: i64,
    pub serial_number: Option<String>,
    pub device_make: Option<String>,
    pub terminal_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalEvent {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalEventStatus {
    pub delivered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalPresence {
    pub online: bool,
    pub available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplePayDomains {
    #[serde(rename = "domainNames", deserialize_with = "serde_helpers::null_as_default")]
    pub domain_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSessionTimeout {
    pub payment_session_timeout: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn customer_deserializes_camel_case_timestamps() {
        let value = json!({
            "id": 1173,
            "email": "customer@email.com",
            "customer_code": "CUS_xnxdt6s1zg1f4nx",
            "first_name": null,
            "phone": null,
            "metadata": {},
            "createdAt": "2016-03-29T20:03:09.000Z",
            "updatedAt": "2016-03-29T20:03:09.000Z"
        });

        let customer: Customer = serde_json::from_value(value).expect("customer should deserialize");

        assert_eq!(customer.id, 1173);
        assert_eq!(customer.customer_code.as_deref(), Some("CUS_xnxdt6s1zg1f4nx"));
        assert!(customer.first_name.is_none());
        assert_eq!(customer.created_at.as_deref(), Some("2016-03-29T20:03:09.000Z"));
        assert!(customer.authorizations.is_empty());
    }

    #[test]
    fn transaction_deserializes_nested_records() {
        let value = json!({
            "id": 4099260516u64,
            "status": "success",
            "reference": "re4lyvq3s3",
            "amount": 40333,
            "paid_at": "2024-08-22T09:15:02.000Z",
            "channel": "card",
            "currency": "NGN",
            "fees": "10283",
            "authorization": {
                "authorization_code": "AUTH_uh8bcl3zbn",
                "last4": "4081",
                "reusable": true
            },
            "customer": {"id": 181873746, "email": "demo@test.com"}
        });

        let transaction: Transaction =
            serde_json::from_value(value).expect("transaction should deserialize");

        assert_eq!(transaction.amount, Some(40333));
        assert_eq!(transaction.fees, Some(10283));
        let authorization = transaction.authorization.expect("authorization");
        assert_eq!(authorization.reusable, Some(true));
        assert_eq!(transaction.customer.expect("customer").id, 181873746);
    }

    #[test]
    fn subaccount_reads_fractional_percentage() {
        let value = json!({
            "id": 55,
            "subaccount_code": "ACCT_4hl4xenwpjy5wb",
            "percentage_charge": 18.2,
            "settlement_bank": "Access Bank"
        });

        let subaccount: Subaccount = serde_json::from_value(value).expect("subaccount should deserialize");

        assert_eq!(subaccount.percentage_charge, Some(Decimal::new(182, 1)));
    }

    #[test]
    fn plan_reads_interval() {
        let plan: Plan = serde_json::from_value(json!({
            "id": 28,
            "name": "Monthly retainer",
            "interval": "monthly",
            "amount": 500000
        }))
        .expect("plan should deserialize");

        assert_eq!(plan.interval, Some(Interval::Monthly));
        assert_eq!(plan.amount, Some(500000));
    }
}
