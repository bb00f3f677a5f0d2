//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated URL prefix prepended to every resource name.
///
/// The prefix is used verbatim: `"http://api.example.com/v1/"` combined with
/// the resource name `"users"` yields `"http://api.example.com/v1/users"`, so
/// the trailing slash is part of the value. The default is `"/"`, which
/// produces same-origin paths such as `"/items"`.
///
/// # Example
///
/// ```rust
/// use thickm::BaseUrl;
///
/// let base = BaseUrl::new("http://api.example.com/v1/").unwrap();
/// assert_eq!(base.join("users"), "http://api.example.com/v1/users");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the value is empty and
    /// [`ConfigError::InvalidBaseUrl`] if it contains whitespace.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if url.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        Ok(Self(url))
    }

    /// Appends a resource name to this prefix.
    #[must_use]
    pub fn join(&self, name: &str) -> String {
        format!("{}{name}", self.0)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
