/*
[INPUT]:  ApiRequest values (or the local validation error that replaced them)
[OUTPUT]: Execution-model specific result: a future or a finished ApiResponse
[POS]:    HTTP layer - seam between resource wrappers and the two clients
[UPDATE]: When adding a new execution model
*/

use serde::de::DeserializeOwned;

use crate::http::{ApiRequest, Result};

/// Executes API requests for resource wrappers.
///
/// [`PaystackClient`](crate::PaystackClient) yields a boxed future,
/// [`BlockingPaystackClient`](crate::BlockingPaystackClient) yields the
/// result directly. A request that failed local validation is rejected
/// without touching the network.
pub trait Transport {
    type Output<T: DeserializeOwned + Send + 'static>;

    fn dispatch<T: DeserializeOwned + Send + 'static>(
        &self,
        request: Result<ApiRequest>,
    ) -> Self::Output<T>;
}
