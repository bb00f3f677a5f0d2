//! Query string parameters for GET requests.
//!
//! [`QueryParams`] is an ordered list of key/value pairs. It can be built by
//! hand or from any `Serialize` value whose JSON form is an object:
//!
//! - strings are used verbatim
//! - numbers and booleans use their JSON text
//! - `null` values are skipped
//! - arrays repeat the key once per element
//! - nested objects are JSON-stringified
//!
//! # Example
//!
//! ```rust
//! use thickm::clients::QueryParams;
//! use serde_json::json;
//!
//! let params = QueryParams::from_serialize(&json!({
//!     "embedded": {"groups": 1},
//!     "page": 2,
//! }))
//! .unwrap();
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "embedded=%7B%22groups%22%3A1%7D&page=2"
//! );
//! ```

use serde::Serialize;
use serde_json::Value;

/// Ordered query string parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds parameters from the JSON form of `params`.
    ///
    /// Keys are emitted in sorted order so the resulting URL is stable.
    ///
    /// # Errors
    ///
    /// Returns the serde error if `params` cannot be serialized.
    pub fn from_serialize<T: Serialize + ?Sized>(params: &T) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(params)?;
        let mut query = Self::new();

        if let Value::Object(map) = value {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            for (key, val) in entries {
                match val {
                    Value::Null => {}
                    Value::Array(items) => {
                        for item in items {
                            if let Some(text) = scalar_to_string(item) {
                                query.0.push((key.clone(), text));
                            }
                        }
                    }
                    other => {
                        if let Some(text) = scalar_to_string(other) {
                            query.0.push((key, text));
                        }
                    }
                }
            }
        }

        Ok(query)
    }

    /// Appends a single parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// Appends a parameter whose value is the JSON text of `value`.
    ///
    /// Useful for APIs that accept structured filters, e.g.
    /// `sort=[["partnumber",1]]`.
    ///
    /// # Errors
    ///
    /// Returns the serde error if `value` cannot be serialized.
    pub fn with_json<T: Serialize + ?Sized>(
        self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        let text = serde_json::to_string(value)?;
        Ok(self.with(key, text))
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the key/value pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encodes the parameters as `key=value&key=value`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Nested structures are sent as their JSON text
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}
