//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a response with a non-2xx status
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use thickm::clients::HttpError;
//!
//! match client.get("http://api.x/users", None).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(RestError::Http(HttpError::Response(e))) => {
//!         println!("API error {} {}: {}", e.code, e.status_text, e.body);
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpResponse;
use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The full response is kept so callers can inspect the rejection reason
/// themselves: status code, reason phrase, headers and decoded body.
///
/// # Example
///
/// ```rust
/// use thickm::clients::{HttpResponse, HttpResponseError};
/// use serde_json::json;
///
/// let error = HttpResponseError::from_response(
///     HttpResponse::with_body(404, json!({"error": "Not found"})),
/// );
/// assert_eq!(error.code, 404);
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Request failed with status {code} {status_text}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The reason phrase of the response.
    pub status_text: String,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Response headers.
    pub headers: std::collections::HashMap<String, Vec<String>>,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Wraps a non-successful response.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let error_reference = response.request_id().map(String::from);
        Self {
            code: response.code,
            status_text: response.status_text,
            body: response.body,
            headers: response.headers,
            error_reference,
        }
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the response status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
