/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Paystack adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod resources;
pub mod types;
pub mod validate;
pub mod webhook;

// Re-export commonly used types from http
pub use http::{
    ApiRequest,
    BlockingPaystackClient,
    ClientConfig,
    HttpMethod,
    PaystackClient,
    PaystackError,
    Query,
    Result,
    SecretKey,
    Transport,
};

// Resource accessors on both clients
pub use resources::Api;

// Re-export all types
pub use types::*;
