//! Resource-specific error types for model operations.
//!
//! This module contains error types for [`Resource`](crate::rest::Resource)
//! and [`Collection`](crate::rest::Collection) operations, extending the
//! base [`RestError`](crate::clients::RestError) with model-layer failures
//! such as a rejected payload or a malformed collection response.
//!
//! # Error Handling
//!
//! HTTP failures are not translated: a non-2xx response surfaces as
//! [`ResourceError::Rest`] wrapping [`HttpError::Response`], which keeps the
//! status code, reason phrase, headers and body. Use
//! [`ResourceError::status`] and [`ResourceError::response`] to inspect it.
//!
//! # Example
//!
//! ```rust,ignore
//! use thickm::rest::{Resource, ResourceError};
//!
//! match User::get(&client, "1", None).await {
//!     Ok(user) => println!("Found: {}", user.name),
//!     Err(e) if e.status() == Some(401) => println!("Not logged in"),
//!     Err(ResourceError::InvalidItem { resource, .. }) => {
//!         println!("Server sent an invalid {resource}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Error type for resource and collection operations.
///
/// # Example
///
/// ```rust
/// use thickm::rest::ResourceError;
/// use serde_json::json;
///
/// let error = ResourceError::InvalidItem {
///     resource: "users",
///     data: json!({"name": ""}),
/// };
/// assert!(error.to_string().contains("users"));
///
/// let error = ResourceError::MissingPrimaryKey {
///     resource: "users",
///     field: "_id",
/// };
/// assert!(error.to_string().contains("_id"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The validation hook rejected a payload passed to `build`.
    ///
    /// Raised synchronously, before any network activity.
    #[error("Invalid {resource} item: {data}")]
    InvalidItem {
        /// The resource name (e.g., "users").
        resource: &'static str,
        /// The rejected payload.
        data: serde_json::Value,
    },

    /// A payload could not be converted to or from the resource type.
    #[error("Failed to decode resource: {0}")]
    Decode(#[from] serde_json::Error),

    /// A collection response did not contain an array where one was expected.
    #[error("Malformed {resource} collection: expected an array at '{field}'")]
    MalformedCollection {
        /// The resource name.
        resource: &'static str,
        /// The items field that was read, or `<body>` for bare arrays.
        field: String,
    },

    /// An item URL was requested for an instance without a primary key.
    #[error("Cannot build item URL for {resource}: primary field '{field}' is missing")]
    MissingPrimaryKey {
        /// The resource name.
        resource: &'static str,
        /// The primary field that was looked up.
        field: &'static str,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    ///
    /// Non-2xx responses arrive through this variant.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Returns the response status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Rest(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the rejected response, if the error came from one.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Http(HttpError::Response(e))
            | Self::Rest(RestError::Http(HttpError::Response(e))) => Some(e),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponse;
    use serde_json::json;

    fn response_error(code: u16) -> HttpError {
        HttpError::Response(HttpResponseError::from_response(HttpResponse::with_body(
            code,
            json!({"error": "Unauthorized"}),
        )))
    }

    #[test]
    fn test_invalid_item_formats_message_with_resource_and_data() {
        let error = ResourceError::InvalidItem {
            resource: "users",
            data: json!({"name": "a"}),
        };
        let message = error.to_string();

        assert!(message.contains("users"));
        assert!(message.contains("\"name\""));
    }

    #[test]
    fn test_malformed_collection_names_field() {
        let error = ResourceError::MalformedCollection {
            resource: "users",
            field: "_items".to_string(),
        };

        assert!(error.to_string().contains("_items"));
    }

    #[test]
    fn test_status_from_rest_wrapped_response() {
        let error: ResourceError = RestError::Http(response_error(401)).into();

        assert_eq!(error.status(), Some(401));
        assert_eq!(
            error.response().map(|r| r.body.clone()),
            Some(json!({"error": "Unauthorized"}))
        );
    }

    #[test]
    fn test_status_from_http_response() {
        let error: ResourceError = response_error(500).into();

        assert!(matches!(error, ResourceError::Http(_)));
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_status_is_none_without_response() {
        let error = ResourceError::MissingPrimaryKey {
            resource: "users",
            field: "id",
        };
        assert_eq!(error.status(), None);
        assert!(error.response().is_none());

        let error: ResourceError = RestError::InvalidUrl { url: String::new() }.into();
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_from_serde_error_conversion() {
        let serde_error = serde_json::from_str::<u64>("\"x\"").unwrap_err();

        let error: ResourceError = serde_error.into();
        assert!(matches!(error, ResourceError::Decode(_)));
    }
}
