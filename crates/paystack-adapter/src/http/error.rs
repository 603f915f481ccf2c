/*
[INPUT]:  Error sources (configuration, local validation, HTTP, serialization)
[OUTPUT]: Structured error types separating fatal usage errors from transport failures
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new validators or error sources
*/

use thiserror::Error;

/// Main error type for the Paystack adapter
///
/// API-level failures (non-2xx statuses, unparseable bodies) are not errors:
/// they come back as an [`ApiResponse`](crate::ApiResponse) with `status == false`.
#[derive(Error, Debug)]
pub enum PaystackError {
    /// Client could not be configured (missing secret key, bad header value)
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP method the client does not dispatch
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Amount argument was zero or negative
    #[error("Invalid amount {0}: amount must be greater than zero")]
    InvalidAmount(i64),

    /// Interval name outside the supported set
    #[error("Invalid interval '{0}': expected one of hourly, daily, weekly, monthly, quarterly, biannually, annually")]
    InvalidInterval(String),

    /// Argument combination rejected before sending
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl PaystackError {
    /// Check if the error was raised by local validation before any I/O
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            PaystackError::UnsupportedMethod(_)
                | PaystackError::InvalidAmount(_)
                | PaystackError::InvalidInterval(_)
                | PaystackError::InvalidArgument(_)
        )
    }

    /// Check if the error comes from client construction
    pub fn is_config_error(&self) -> bool {
        matches!(self, PaystackError::Config(_))
    }

    /// Create an argument error from a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PaystackError::InvalidArgument(message.into())
    }
}

/// Result type alias for Paystack operations
pub type Result<T> = std::result::Result<T, PaystackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_usage_error() {
        assert!(PaystackError::InvalidAmount(-100).is_usage_error());
        assert!(PaystackError::InvalidInterval("fortnightly".into()).is_usage_error());
        assert!(PaystackError::UnsupportedMethod("TRACE".into()).is_usage_error());
        assert!(!PaystackError::Config("missing".into()).is_usage_error());
    }

    #[test]
    fn test_error_is_config_error() {
        assert!(PaystackError::Config("missing".into()).is_config_error());
        assert!(!PaystackError::InvalidAmount(0).is_config_error());
    }

    #[test]
    fn test_invalid_argument_creation() {
        let err = PaystackError::invalid_argument("split_code and subaccount are mutually exclusive");
        match err {
            PaystackError::InvalidArgument(message) => {
                assert_eq!(message, "split_code and subaccount are mutually exclusive");
            }
            _ => panic!("Expected InvalidArgument error variant"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = PaystackError::InvalidAmount(0);
        assert_eq!(
            err.to_string(),
            "Invalid amount 0: amount must be greater than zero"
        );
    }
}
