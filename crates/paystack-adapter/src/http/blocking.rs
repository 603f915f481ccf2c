/*
[INPUT]:  Secret key, ClientConfig and ApiRequests from resource wrappers
[OUTPUT]: ApiResponse values, blocking the calling thread per round trip
[POS]:    HTTP layer - synchronous execution adapter over the shared core
[UPDATE]: When the async client gains options that must be mirrored here
*/

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::client::{ClientConfig, SecretKey, Settings};
use crate::http::response::normalize;
use crate::http::{ApiRequest, PaystackError, Result, Transport};
use crate::types::ApiResponse;

/// Blocking HTTP client for the Paystack API.
///
/// Must not be created or used from inside an async runtime; use
/// [`PaystackClient`](crate::PaystackClient) there.
#[derive(Debug, Clone)]
pub struct BlockingPaystackClient {
    http_client: Client,
    settings: Settings,
}

impl BlockingPaystackClient {
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
    pub fn execute<T>(&self, request: ApiRequest) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.dispatch(Ok(request))
    }
}

impl Transport for BlockingPaystackClient {
    type Output<T: DeserializeOwned + Send + 'static> = Result<ApiResponse<T>>;

    fn dispatch<T: DeserializeOwned + Send + 'static>(
        &self,
        request: Result<ApiRequest>,
    ) -> Self::Output<T> {
        let descriptor = self.settings.descriptor(request?)?;
        debug!(method = %descriptor.method, url = %descriptor.url, "sending blocking request");

        let mut builder = self
            .http_client
            .request(descriptor.method.to_reqwest(), descriptor.url);
        if let Some(body) = &descriptor.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status_code = response.status().as_u16();
        let body = response.bytes()?;
        debug!(status_code, bytes = body.len(), "received response");

        normalize(status_code, &body)
    }
}
