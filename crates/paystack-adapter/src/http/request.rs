/*
[INPUT]:  HTTP method, endpoint path, optional query parameters and JSON payload
[OUTPUT]: ApiRequest values and fully qualified request descriptors
[POS]:    HTTP layer - request building shared by async and blocking transports
[UPDATE]: When adding HTTP methods or changing URL/payload assembly rules
*/

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde_json::Value;
use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::http::{PaystackError, Result};

/// Page size used by list endpoints when the caller does not pass one
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// HTTP methods the transports know how to dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = PaystackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(PaystackError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// A single API call before it is bound to a client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: HttpMethod,
    path: String,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Build a request from a method name, rejecting unknown methods
    pub fn from_method_name(method: &str, path: impl Into<String>) -> Result<Self> {
        Ok(Self::new(method.parse()?, path))
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Serialize `body` as the JSON payload
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Use an already assembled JSON payload
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Bind the request to a base origin
    pub fn into_descriptor(self, base_url: &str) -> Result<RequestDescriptor> {
        let url = build_url(base_url, &self.path)?;
        Ok(RequestDescriptor {
            method: self.method,
            url,
            body: self.body,
        })
    }
}

/// Fully qualified request, built fresh per call
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: Url,
    pub body: Option<Value>,
}

/// Concatenate base origin and endpoint path into an absolute URL
pub fn build_url(base_url: &str, path: &str) -> Result<Url> {
    let joined = format!("{}{}", base_url.trim_end_matches('/'), path);
    Ok(Url::parse(&joined)?)
}

/// Bytes escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'@');

/// Percent-encode a caller-supplied value for use as one path segment
pub fn segment<V: fmt::Display + ?Sized>(value: &V) -> String {
    utf8_percent_encode(&value.to_string(), PATH_SEGMENT).to_string()
}

/// Append `&key=value` pairs to `url`, skipping absent values.
///
/// Only valid on URLs that already carry a `?` parameter.
pub fn append_query<'a, I>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut out = url.to_string();
    for (key, value) in params {
        if let Some(value) = value {
            out.push('&');
            out.push_str(key);
            out.push('=');
            out.extend(byte_serialize(value.as_bytes()));
        }
    }
    out
}

/// Start a list endpoint path with its leading `perPage` parameter
pub fn paginated_path(path: &str, per_page: Option<u32>) -> String {
    format!("{path}?perPage={}", per_page.unwrap_or(DEFAULT_PAGE_SIZE))
}

/// Ordered query parameters; absent values are never recorded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<V: fmt::Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Record a timestamp as RFC 3339 (`2024-01-01T00:00:00Z`)
    pub fn push_date(self, key: &str, value: Option<DateTime<Utc>>) -> Self {
        let value = value.map(|date| date.to_rfc3339_opts(SecondsFormat::Secs, true));
        self.push(key, value)
    }

    /// Append another query's pairs after the ones already recorded
    pub fn extend(mut self, other: Query) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render `path?k=v&..`, or `path` alone when nothing was recorded
    pub fn to_path(&self, path: &str) -> String {
        match self.pairs.split_first() {
            None => path.to_string(),
            Some(((key, value), rest)) => {
                let first = format!("{path}?{key}={}", byte_serialize(value.as_bytes()).collect::<String>());
                append_query(
                    &first,
                    rest.iter()
                        .map(|(key, value)| (key.as_str(), Some(value.as_str()))),
                )
            }
        }
    }

    /// Append the recorded pairs to a URL that already has a `?` parameter
    pub fn append_to(&self, url: &str) -> String {
        append_query(
            url,
            self.pairs
                .iter()
                .map(|(key, value)| (key.as_str(), Some(value.as_str()))),
        )
    }
}

/// Add optional fields to a required-field payload.
///
/// Candidates with `None` are dropped; present values (including `0`,
/// `false` and `""`) are inserted as given. A non-object `required` value
/// is returned unchanged.
pub fn merge_optional<I, K>(required: Value, optional: I) -> Value
where
    I: IntoIterator<Item = (K, Option<Value>)>,
    K: Into<String>,
{
    match required {
        Value::Object(mut map) => {
            for (key, value) in optional {
                if let Some(value) = value {
                    map.insert(key.into(), value);
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("GET", HttpMethod::Get)]
    #[case("post", HttpMethod::Post)]
    #[case(" Put ", HttpMethod::Put)]
    #[case("patch", HttpMethod::Patch)]
    #[case("DELETE", HttpMethod::Delete)]
    fn test_method_parse(#[case] name: &str, #[case] expected: HttpMethod) {
        assert_eq!(name.parse::<HttpMethod>().expect("method"), expected);
    }

    #[rstest]
    #[case("TRACE")]
    #[case("CONNECT")]
    #[case("")]
    fn test_unsupported_method(#[case] name: &str) {
        let err = ApiRequest::from_method_name(name, "/bank").expect_err("should reject");
        assert!(matches!(err, PaystackError::UnsupportedMethod(_)));
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_append_query_skips_absent_values() {
        let url = append_query(
            "/customer?perPage=50",
            [("page", Some("2")), ("from", None), ("to", Some("2024"))],
        );
        assert_eq!(url, "/customer?perPage=50&page=2&to=2024");
    }

    #[test]
    fn test_append_query_encodes_values() {
        let url = append_query("/bank?country=nigeria", [("name", Some("a b&c"))]);
        assert_eq!(url, "/bank?country=nigeria&name=a+b%26c");
    }

    #[test]
    fn test_query_keeps_call_order() {
        let query = Query::new()
            .push("page", Some(1))
            .push("status", None::<&str>)
            .push("active", Some(false))
            .push("amount", Some(0));

        assert_eq!(
            query.append_to(&paginated_path("/plan", None)),
            "/plan?perPage=50&page=1&active=false&amount=0"
        );
    }

    #[test]
    fn test_query_push_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
        let query = Query::new().push_date("from", date).push_date("to", None);
        assert_eq!(
            query.pairs(),
            &[("from".to_string(), "2024-01-01T00:00:00Z".to_string())]
        );
    }

    #[test]
    fn test_query_to_path() {
        assert_eq!(Query::new().to_path("/bank"), "/bank");

        let query = Query::new()
            .push("country", Some("south africa"))
            .push("currency", Some("ZAR"));
        assert_eq!(
            query.to_path("/bank"),
            "/bank?country=south+africa&currency=ZAR"
        );
    }

    #[test]
    fn test_merge_optional_drops_absent_keeps_falsy() {
        let payload = merge_optional(
            json!({ "code": "SUB_123" }),
            [
                ("token", None),
                ("amount", Some(json!(0))),
                ("send_invoices", Some(json!(false))),
                ("description", Some(json!(""))),
            ],
        );

        assert_eq!(
            payload,
            json!({
                "code": "SUB_123",
                "amount": 0,
                "send_invoices": false,
                "description": ""
            })
        );
        assert!(payload.get("token").is_none());
    }

    #[test]
    fn test_descriptor_joins_base_url() {
        let descriptor = ApiRequest::get("/transaction/verify/ref-1")
            .into_descriptor("https://api.paystack.co/")
            .expect("descriptor");

        assert_eq!(descriptor.method, HttpMethod::Get);
        assert_eq!(
            descriptor.url.as_str(),
            "https://api.paystack.co/transaction/verify/ref-1"
        );
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn test_json_body() {
        let request = ApiRequest::post("/customer")
            .json(&json!({ "email": "a@b.co" }))
            .expect("body");
        assert_eq!(request.body(), Some(&json!({ "email": "a@b.co" })));
    }

    #[rstest]
    #[case("CUS_xnxdt6s1zg1f4nx", "CUS_xnxdt6s1zg1f4nx")]
    #[case("ann.lee@mail.com", "ann.lee@mail.com")]
    #[case("a?b@x.com", "a%3Fb@x.com")]
    #[case("a/b#c", "a%2Fb%23c")]
    #[case("two words", "two%20words")]
    #[case("a+b&c=d", "a%2Bb%26c%3Dd")]
    #[case("café", "caf%C3%A9")]
    fn test_segment_escapes_reserved_bytes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(segment(raw), expected);
    }

    #[test]
    fn test_segment_accepts_numbers() {
        assert_eq!(segment(&302961_i64), "302961");
    }
}
