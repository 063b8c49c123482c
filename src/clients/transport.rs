//! The narrow interface the REST layer uses to reach the network.

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Sends a single request and returns whatever response came back.
///
/// Implementations must not interpret status codes: a 404 is a successful
/// round-trip at this level. Authentication, default headers and timeouts
/// are the implementation's concern.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation; tests can substitute an in-memory one.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the decoded response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid or the round-trip
    /// fails at the connection level.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
