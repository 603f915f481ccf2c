/*
[INPUT]:  Transport status code and raw response body bytes
[OUTPUT]: ApiResponse envelope (never an error for 4xx/5xx or non-JSON bodies)
[POS]:    HTTP layer - response normalization shared by both transports
[UPDATE]: When envelope routing rules or fixed messages change
*/

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::http::Result;
use crate::types::{ApiResponse, Meta};

/// Message used when the body is not valid JSON
pub const PARSE_FAILURE_MESSAGE: &str = "Could not parse response body";

/// Message used for every 404 response with a JSON body
pub const NOT_FOUND_MESSAGE: &str = "Object not found";

/// Turn a raw HTTP response into an [`ApiResponse`].
///
/// Errors only when a 2xx `data` payload does not fit `T`.
pub fn normalize<T: DeserializeOwned>(status_code: u16, body: &[u8]) -> Result<ApiResponse<T>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(payload) => from_payload(status_code, payload),
        Err(err) => {
            warn!(status_code, error = %err, "response body is not valid JSON");
            Ok(ApiResponse {
                status_code,
                status: false,
                message: PARSE_FAILURE_MESSAGE.to_string(),
                data: None,
                meta: None,
                response_type: None,
                code: None,
                raw: None,
                unparsed_body: Some(body.to_vec()),
            })
        }
    }
}

/// Build the envelope from an already parsed payload
pub fn from_payload<T: DeserializeOwned>(status_code: u16, payload: Value) -> Result<ApiResponse<T>> {
    if status_code == 404 {
        return Ok(not_found(status_code, payload));
    }

    let success = (200..300).contains(&status_code);
    let status = payload
        .get("status")
        .and_then(Value::as_bool)
        .unwrap_or(success);
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let data = if success {
        match present(&payload, "data") {
            Some(data) => Some(T::deserialize(data)?),
            None => None,
        }
    } else {
        warn!(status_code, message = %message, "api returned a failure envelope");
        present(&payload, "errors").and_then(|errors| T::deserialize(errors).ok())
    };

    let meta = present(&payload, "meta").and_then(|meta| Meta::deserialize(meta).ok());

    Ok(ApiResponse {
        status_code,
        status,
        message,
        data,
        meta,
        response_type: string_field(&payload, "type"),
        code: string_field(&payload, "code"),
        raw: Some(payload),
        unparsed_body: None,
    })
}

impl<T> ApiResponse<T> {
    /// Re-read `data` from the raw payload as another model
    pub fn into_model<U: DeserializeOwned>(self) -> Result<ApiResponse<U>> {
        match self.raw {
            Some(payload) => from_payload(self.status_code, payload),
            None => Ok(ApiResponse {
                status_code: self.status_code,
                status: self.status,
                message: self.message,
                data: None,
                meta: self.meta,
                response_type: self.response_type,
                code: self.code,
                raw: None,
                unparsed_body: self.unparsed_body,
            }),
        }
    }
}

fn not_found<T>(status_code: u16, payload: Value) -> ApiResponse<T> {
    ApiResponse {
        status_code,
        status: false,
        message: NOT_FOUND_MESSAGE.to_string(),
        data: None,
        meta: None,
        response_type: None,
        code: None,
        raw: Some(payload),
        unparsed_body: None,
    }
}

fn present<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| !value.is_null())
}

fn string_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}
