/*
[INPUT]:  Secret key (argument or PAYSTACK_SECRET_KEY), base URL, optional timeouts
[OUTPUT]: Configured async reqwest client dispatching ApiRequests
[POS]:    HTTP layer - core client implementation and shared settings
[UPDATE]: When adding connection options or changing default headers
*/

use std::fmt;
use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::response::normalize;
use crate::http::{ApiRequest, PaystackError, RequestDescriptor, Result, Transport};
use crate::types::ApiResponse;

/// Base URL for the Paystack API
pub const BASE_URL: &str = "https://api.paystack.co";

/// Environment variable consulted when no secret key is passed
pub const SECRET_KEY_ENV: &str = "PAYSTACK_SECRET_KEY";

/// User agent sent with every request
pub const USER_AGENT_VALUE: &str = concat!("paystack-adapter/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
///
/// Timeouts default to `None`, leaving reqwest's own defaults in place.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Default configuration pointed at another origin (mock servers, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

/// Paystack secret key; never printed by `Debug`
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(PaystackError::Config("secret key is empty".to_string()));
        }
        Ok(Self(key))
    }

    /// Use `explicit` when given, else `PAYSTACK_SECRET_KEY`
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        Self::resolve_with(explicit, |name| std::env::var(name).ok())
    }

    /// Like [`SecretKey::resolve`] with a custom environment lookup
    pub fn resolve_with<F>(explicit: Option<&str>, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let key = explicit
            .filter(|key| !key.trim().is_empty())
            .map(str::to_string)
            .or_else(|| lookup(SECRET_KEY_ENV).filter(|key| !key.trim().is_empty()))
            .ok_or_else(|| {
                PaystackError::Config(format!(
                    "no secret key provided and {SECRET_KEY_ENV} is not set"
                ))
            })?;
        Ok(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

/// Immutable per-client settings shared by both transports
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) base_url: String,
    pub(crate) headers: HeaderMap,
}

impl Settings {
    pub(crate) fn new(secret_key: &SecretKey, base_url: String) -> Result<Self> {
        Ok(Self {
            base_url,
            headers: default_headers(secret_key)?,
        })
    }

    pub(crate) fn descriptor(&self, request: ApiRequest) -> Result<RequestDescriptor> {
        request.into_descriptor(&self.base_url)
    }
}

fn default_headers(secret_key: &SecretKey) -> Result<HeaderMap> {
    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", secret_key.expose()))
        .map_err(|err| PaystackError::Config(format!("secret key is not a valid header value: {err}")))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    Ok(headers)
}

/// Async HTTP client for the Paystack API
#[derive(Debug, Clone)]
pub struct PaystackClient {
    http_client: Client,
    settings: Settings,
}

impl PaystackClient {
    /// Create a client with default configuration
    pub fn new(secret_key: Option<&str>) -> Result<Self> {
        Self::with_config(secret_key, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(secret_key: Option<&str>, config: ClientConfig) -> Result<Self> {
        Self::with_secret_key(SecretKey::resolve(secret_key)?, config)
    }

    pub fn with_secret_key(secret_key: SecretKey, config: ClientConfig) -> Result<Self> {
        let settings = Settings::new(&secret_key, config.base_url)?;

        let mut builder = Client::builder().default_headers(settings.headers.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder
            .build()
            .map_err(|err| PaystackError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http_client,
            settings,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    /// Send an arbitrary request, deserializing `data` as `T`
    pub async fn execute<T>(&self, request: ApiRequest) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.dispatch(Ok(request)).await
    }
}

impl Transport for PaystackClient {
    type Output<T: DeserializeOwned + Send + 'static> = BoxFuture<'static, Result<ApiResponse<T>>>;

    fn dispatch<T: DeserializeOwned + Send + 'static>(
        &self,
        request: Result<ApiRequest>,
    ) -> Self::Output<T> {
        let prepared = request.and_then(|request| self.settings.descriptor(request));
        let http_client = self.http_client.clone();
        Box::pin(async move { send(&http_client, prepared?).await })
    }
}

async fn send<T: DeserializeOwned>(
    http_client: &Client,
    descriptor: RequestDescriptor,
) -> Result<ApiResponse<T>> {
    debug!(method = %descriptor.method, url = %descriptor.url, "sending request");

    let mut builder = http_client.request(descriptor.method.to_reqwest(), descriptor.url);
    if let Some(body) = &descriptor.body {
        builder = builder.json(body);
    }

    let response = builder.send().await?;
    let status_code = response.status().as_u16();
    let body = response.bytes().await?;
    debug!(status_code, bytes = body.len(), "received response");

    normalize(status_code, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_explicit_key() {
        let key = SecretKey::resolve_with(Some("sk_test_arg"), |_| Some("sk_test_env".into()))
            .expect("key");
        assert_eq!(key.expose(), "sk_test_arg");
    }

    #[test]
    fn test_resolve_falls_back_to_env() {
        let key = SecretKey::resolve_with(None, |name| {
            assert_eq!(name, SECRET_KEY_ENV);
            Some("sk_test_env".into())
        })
        .expect("key");
        assert_eq!(key.expose(), "sk_test_env");
    }

    #[test]
    fn test_resolve_missing_key_is_config_error() {
        let err = SecretKey::resolve_with(None, |_| None).expect_err("missing key");
        assert!(err.is_config_error());

        let err = SecretKey::resolve_with(Some(""), |_| Some(" ".into())).expect_err("blank key");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_secret_key_debug_is_redacted() {
        let key = SecretKey::new("sk_live_secret").expect("key");
        assert_eq!(format!("{key:?}"), "SecretKey(***)");
    }

    #[test]
    fn test_default_headers() {
        let key = SecretKey::new("sk_test_123").expect("key");
        let headers = default_headers(&key).expect("headers");

        assert_eq!(headers[AUTHORIZATION], "Bearer sk_test_123");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(
            headers[USER_AGENT]
                .to_str()
                .expect("ascii")
                .starts_with("paystack-adapter/")
        );
    }

    #[test]
    fn test_invalid_header_value_is_config_error() {
        let key = SecretKey::new("sk_test\nbroken").expect("key");
        let err = PaystackClient::with_secret_key(key, ClientConfig::default())
            .expect_err("newline in header");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_config_with_base_url() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert!(config.timeout.is_none());
    }
}
