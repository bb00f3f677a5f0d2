//! Error types for library configuration.
//!
//! Configuration constructors return `Result<T, ConfigError>` so invalid
//! settings are rejected when the client is built, before any request is
//! made.
//!
//! # Example
//!
//! ```rust
//! use thickm::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBaseUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ThickmConfig`](crate::ThickmConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Use \"/\" for same-origin requests.")]
    EmptyBaseUrl,

    /// Base URL contains characters that cannot appear in a URL prefix.
    #[error("Invalid base URL '{url}'. Base URLs must not contain whitespace.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Update verb is not one of the supported methods.
    #[error("Invalid update method '{method}'. Expected 'PUT' or 'PATCH'.")]
    InvalidUpdateMethod {
        /// The method string that was provided.
        method: String,
    },

    /// A default header name is not a valid HTTP token.
    #[error("Invalid header name '{name}'.")]
    InvalidHeaderName {
        /// The invalid header name that was provided.
        name: String,
    },
}
