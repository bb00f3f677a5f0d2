//! Configuration types for the model layer.
//!
//! The main types in this module are:
//!
//! - [`ThickmConfig`]: base URL, default write headers and update verb
//! - [`ThickmConfigBuilder`]: a builder for constructing [`ThickmConfig`]
//! - [`BaseUrl`]: a validated URL prefix
//! - [`UpdateMethod`]: the verb used to update persisted resources
//!
//! Configuration is a plain value. Build it once at startup and hand it to a
//! [`RestClient`](crate::clients::RestClient); every model operation reads it
//! from there.
//!
//! # Example
//!
//! ```rust
//! use thickm::{BaseUrl, ThickmConfig, UpdateMethod};
//!
//! let config = ThickmConfig::builder()
//!     .base_url(BaseUrl::new("http://coolapp.com/api/v1/").unwrap())
//!     .update_method(UpdateMethod::Put)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().join("users"), "http://coolapp.com/api/v1/users");
//! ```

mod newtypes;
mod update_method;

pub use newtypes::BaseUrl;
pub use update_method::UpdateMethod;

use std::collections::HashMap;

use crate::error::ConfigError;

/// Content type sent with every write request by default.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Configuration shared by every resource operation.
///
/// # Defaults
///
/// - `base_url`: `"/"`
/// - `update_method`: [`UpdateMethod::Patch`]
/// - create, update and delete headers: `Content-Type: application/json`
/// - `user_agent_prefix`: `None`
#[derive(Clone, Debug)]
pub struct ThickmConfig {
    base_url: BaseUrl,
    update_method: UpdateMethod,
    create_headers: HashMap<String, String>,
    update_headers: HashMap<String, String>,
    delete_headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
}

impl ThickmConfig {
    /// Creates a new builder for constructing a `ThickmConfig`.
    #[must_use]
    pub fn builder() -> ThickmConfigBuilder {
        ThickmConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the verb used to update persisted resources.
    #[must_use]
    pub const fn update_method(&self) -> UpdateMethod {
        self.update_method
    }

    /// Returns the default headers for create (POST) requests.
    #[must_use]
    pub const fn create_headers(&self) -> &HashMap<String, String> {
        &self.create_headers
    }

    /// Returns the default headers for update requests.
    #[must_use]
    pub const fn update_headers(&self) -> &HashMap<String, String> {
        &self.update_headers
    }

    /// Returns the default headers for delete requests.
    #[must_use]
    pub const fn delete_headers(&self) -> &HashMap<String, String> {
        &self.delete_headers
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ThickmConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            update_method: UpdateMethod::default(),
            create_headers: json_headers(),
            update_headers: json_headers(),
            delete_headers: json_headers(),
            user_agent_prefix: None,
        }
    }
}

// Verify ThickmConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ThickmConfig>();
};

fn json_headers() -> HashMap<String, String> {
    HashMap::from([(
        "Content-Type".to_string(),
        JSON_CONTENT_TYPE.to_string(),
    )])
}

/// Builder for constructing [`ThickmConfig`] instances.
///
/// Every field is optional. Headers added through the builder are merged over
/// the JSON content-type default, so a caller can add an `Authorization`
/// header without losing `Content-Type`.
///
/// # Example
///
/// ```rust
/// use thickm::{BaseUrl, ThickmConfig};
///
/// let config = ThickmConfig::builder()
///     .base_url(BaseUrl::new("http://api.x/").unwrap())
///     .write_header("Authorization", "Bearer token")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     config.create_headers().get("Content-Type").map(String::as_str),
///     Some("application/json")
/// );
/// assert!(config.delete_headers().contains_key("Authorization"));
/// ```
#[derive(Debug, Default)]
pub struct ThickmConfigBuilder {
    base_url: Option<BaseUrl>,
    update_method: Option<UpdateMethod>,
    create_headers: HashMap<String, String>,
    update_headers: HashMap<String, String>,
    delete_headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
}

impl ThickmConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the verb used to update persisted resources.
    #[must_use]
    pub const fn update_method(mut self, method: UpdateMethod) -> Self {
        self.update_method = Some(method);
        self
    }

    /// Adds a default header to create (POST) requests.
    #[must_use]
    pub fn create_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.create_headers.insert(name.into(), value.into());
        self
    }

    /// Adds a default header to update requests.
    #[must_use]
    pub fn update_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.update_headers.insert(name.into(), value.into());
        self
    }

    /// Adds a default header to delete requests.
    #[must_use]
    pub fn delete_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.delete_headers.insert(name.into(), value.into());
        self
    }

    /// Adds a default header to create, update and delete requests.
    #[must_use]
    pub fn write_header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        self.create_header(name.clone(), value.clone())
            .update_header(name.clone(), value.clone())
            .delete_header(name, value)
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ThickmConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderName`] if any header name is not a
    /// valid HTTP token.
    pub fn build(self) -> Result<ThickmConfig, ConfigError> {
        let create_headers = merge_headers(self.create_headers)?;
        let update_headers = merge_headers(self.update_headers)?;
        let delete_headers = merge_headers(self.delete_headers)?;

        Ok(ThickmConfig {
            base_url: self.base_url.unwrap_or_default(),
            update_method: self.update_method.unwrap_or_default(),
            create_headers,
            update_headers,
            delete_headers,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

fn merge_headers(
    extra: HashMap<String, String>,
) -> Result<HashMap<String, String>, ConfigError> {
    let mut headers = json_headers();
    for (name, value) in extra {
        if !is_valid_header_name(&name) {
            return Err(ConfigError::InvalidHeaderName { name });
        }
        headers.insert(name, value);
    }
    Ok(headers)
}

/// RFC 7230 token characters.
fn is_valid_header_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ThickmConfig::builder().build().unwrap();

        assert_eq!(config.base_url().as_ref(), "/");
        assert_eq!(config.update_method(), UpdateMethod::Patch);
        assert!(config.user_agent_prefix().is_none());
        for headers in [
            config.create_headers(),
            config.update_headers(),
            config.delete_headers(),
        ] {
            assert_eq!(
                headers.get("Content-Type"),
                Some(&"application/json".to_string())
            );
        }
    }

    #[test]
    fn test_default_matches_empty_builder() {
        let built = ThickmConfig::builder().build().unwrap();
        let default = ThickmConfig::default();
        assert_eq!(built.base_url(), default.base_url());
        assert_eq!(built.create_headers(), default.create_headers());
        assert_eq!(built.update_method(), default.update_method());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ThickmConfig::builder()
            .base_url(BaseUrl::new("http://api.x/").unwrap())
            .update_method(UpdateMethod::Put)
            .create_header("X-Create", "1")
            .update_header("X-Update", "2")
            .delete_header("X-Delete", "3")
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://api.x/");
        assert_eq!(config.update_method(), UpdateMethod::Put);
        assert_eq!(config.create_headers().get("X-Create"), Some(&"1".to_string()));
        assert!(!config.create_headers().contains_key("X-Update"));
        assert_eq!(config.update_headers().get("X-Update"), Some(&"2".to_string()));
        assert_eq!(config.delete_headers().get("X-Delete"), Some(&"3".to_string()));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_content_type_can_be_overridden() {
        let config = ThickmConfig::builder()
            .create_header("Content-Type", "application/vnd.api+json")
            .build()
            .unwrap();

        assert_eq!(
            config.create_headers().get("Content-Type"),
            Some(&"application/vnd.api+json".to_string())
        );
        assert_eq!(
            config.update_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_builder_rejects_invalid_header_name() {
        let result = ThickmConfig::builder()
            .write_header("Bad Header", "x")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderName { name }) if name == "Bad Header"
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThickmConfig>();
    }
}
