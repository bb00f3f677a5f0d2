//! REST-specific error types.
//!
//! - [`RestError::InvalidUrl`]: when a request URL fails validation
//! - [`RestError::Http`]: wraps underlying HTTP errors

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST client operations.
///
/// # Example
///
/// ```rust
/// use thickm::clients::rest::RestError;
///
/// let error = RestError::InvalidUrl { url: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The request URL is invalid (empty or containing whitespace).
    #[error("Invalid request URL: '{url}'")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the response status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::InvalidUrl { .. } => None,
        }
    }
}
