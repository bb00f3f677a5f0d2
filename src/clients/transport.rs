//! The transport seam between the model layer and the network.

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Sends HTTP requests on behalf of a [`RestClient`](crate::clients::RestClient).
///
/// Implementations return `Ok` for every response that was received,
/// whatever its status; the REST client decides which statuses are failures.
/// `Err` is reserved for requests that never produced a response (invalid
/// request, connection failure, timeout).
///
/// [`HttpClient`](crate::clients::HttpClient) is the reqwest-backed
/// implementation. Tests and alternative runtimes supply their own.
///
/// # Example
///
/// ```rust
/// use thickm::clients::{HttpError, HttpRequest, HttpResponse, Transport};
/// use serde_json::json;
///
/// struct AlwaysEmpty;
///
/// impl Transport for AlwaysEmpty {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::with_body(200, json!([])))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the received response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<T: Transport> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}
