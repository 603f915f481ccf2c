/*
[INPUT]:  Paystack JSON envelope ({status, message, data, meta, type, code, errors})
[OUTPUT]: ApiResponse result envelope and pagination metadata
[POS]:    Data layer - uniform result type returned by every call
[UPDATE]: When the envelope gains fields or pagination metadata changes
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::serde_helpers;

/// Uniform result of every API call.
///
/// `data` comes from the body's `data` field on 2xx responses and from its
/// `errors` field otherwise, so check [`ApiResponse::is_success`] before
/// relying on its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T = Value> {
    /// Transport status code
    pub status_code: u16,
    /// `status` flag reported by the API
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
    /// Body `type` field (e.g. `api_error`, `validation_error`)
    pub response_type: Option<String>,
    pub code: Option<String>,
    /// Parsed payload, untouched
    pub raw: Option<Value>,
    /// Original bytes when the body was not JSON
    pub unparsed_body: Option<Vec<u8>>,
}

impl<T> ApiResponse<T> {
    /// True when both the transport and the API report success
    pub fn is_success(&self) -> bool {
        self.status && (200..300).contains(&self.status_code)
    }

    /// The body's `errors` field, if any
    pub fn errors(&self) -> Option<&Value> {
        self.raw.as_ref()?.get("errors")
    }
}

/// Pagination metadata returned by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default, deserialize_with = "serde_helpers::lenient_u64")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_u64")]
    pub skipped: Option<u64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_u64")]
    pub per_page: Option<u64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_u64")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "serde_helpers::lenient_u64")]
    pub page_count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}
