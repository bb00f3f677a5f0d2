//! HTTP client types for talking to REST backends.
//!
//! This module provides the transport layer under the model types: request
//! and response values, query string encoding, the [`Transport`] seam, and
//! the reqwest-backed [`HttpClient`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async reqwest client, the default [`Transport`]
//! - [`HttpRequest`]: A request to be sent
//! - [`HttpResponse`]: A decoded response (status, headers, JSON body)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`QueryParams`]: Ordered query string parameters
//! - [`rest::RestClient`]: Configuration plus transport, used by every model
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use thickm::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let client = HttpClient::new(None)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "http://api.x/users")
//!     .query_param("page", "2")
//!     .build()?;
//!
//! let response = client.send(request).await?;
//! ```
//!
//! # Failure Statuses
//!
//! [`HttpClient`] hands back every received response. [`RestClient`] turns
//! statuses outside 200-299 into [`HttpError::Response`]. Nothing is retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;
pub mod rest;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use query::QueryParams;
pub use transport::Transport;

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
