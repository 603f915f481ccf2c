/*
[INPUT]:  Paystack literal sets (intervals, currencies, channels, statuses)
[OUTPUT]: Typed Rust enums with serialization and query-string rendering
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new literal values are added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::PaystackError;

/// Billing interval for plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

impl Interval {
    pub const ALL: [Interval; 7] = [
        Interval::Hourly,
        Interval::Daily,
        Interval::Weekly,
        Interval::Monthly,
        Interval::Quarterly,
        Interval::Biannually,
        Interval::Annually,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Hourly => "hourly",
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
            Interval::Quarterly => "quarterly",
            Interval::Biannually => "biannually",
            Interval::Annually => "annually",
        }
    }
}

impl FromStr for Interval {
    type Err = PaystackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Interval::ALL
            .into_iter()
            .find(|interval| interval.as_str() == name)
            .ok_or_else(|| PaystackError::InvalidInterval(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ngn,
    Ghs,
    Zar,
    Usd,
    Kes,
    Xof,
    Egp,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Ghs => "GHS",
            Currency::Zar => "ZAR",
            Currency::Usd => "USD",
            Currency::Kes => "KES",
            Currency::Xof => "XOF",
            Currency::Egp => "EGP",
        }
    }
}

/// Payment channels a transaction may be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Card,
    Bank,
    Ussd,
    Qr,
    MobileMoney,
    BankTransfer,
    Eft,
    ApplePay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Failed,
    Success,
    Abandoned,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Failed => "failed",
            TransactionStatus::Success => "success",
            TransactionStatus::Abandoned => "abandoned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    Default,
    Allow,
    Deny,
}

/// Who pays the Paystack fee on split payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bearer {
    #[serde(rename = "account")]
    Account,
    #[serde(rename = "subaccount")]
    Subaccount,
    #[serde(rename = "all-proportional")]
    AllProportional,
    #[serde(rename = "all")]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    Percentage,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    Nuban,
    MobileMoney,
    Basa,
    Authorization,
    Ghipss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementSchedule {
    Auto,
    Weekly,
    Monthly,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisputeStatus {
    AwaitingMerchantFeedback,
    AwaitingBankFeedback,
    Pending,
    Resolved,
}

impl DisputeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeStatus::AwaitingMerchantFeedback => "awaiting-merchant-feedback",
            DisputeStatus::AwaitingBankFeedback => "awaiting-bank-feedback",
            DisputeStatus::Pending => "pending",
            DisputeStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisputeResolution {
    MerchantAccepted,
    Declined,
}

/// Countries supported by the bank and state listing endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Nigeria,
    Ghana,
    Kenya,
    #[serde(rename = "south africa")]
    SouthAfrica,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Nigeria => "nigeria",
            Country::Ghana => "ghana",
            Country::Kenya => "kenya",
            Country::SouthAfrica => "south africa",
        }
    }

    /// ISO 3166 alpha-2 code
    pub fn code(&self) -> &'static str {
        match self {
            Country::Nigeria => "NG",
            Country::Ghana => "GH",
            Country::Kenya => "KE",
            Country::SouthAfrica => "ZA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Personal,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    IdentityNumber,
    PassportNumber,
    BusinessRegistrationNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalEventType {
    Invoice,
    Transaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalEventAction {
    Process,
    View,
    Print,
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Interval, Currency, TransactionStatus, DisputeStatus, Country);
