/*
[INPUT]:  Client configuration, ApiRequests built by resource wrappers
[OUTPUT]: Normalized ApiResponse envelopes (async or blocking)
[POS]:    HTTP layer - request building, transports and response normalization
[UPDATE]: When adding transports or changing the request/response contract
*/

pub mod blocking;
pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

pub use error::{PaystackError, Result};
pub use request::{ApiRequest, HttpMethod, Query, RequestDescriptor};
pub use transport::Transport;

pub use blocking::BlockingPaystackClient;
pub use client::{ClientConfig, PaystackClient, SecretKey};
