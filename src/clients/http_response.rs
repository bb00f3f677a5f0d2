//! HTTP response types.

use std::collections::HashMap;

/// An HTTP response as seen by the model layer.
///
/// Mirrors the `{data, status, headers, statusText}` shape of a browser HTTP
/// response: `body` holds the decoded JSON payload, `code` and `status_text`
/// the status line, `headers` the lower-cased response headers.
///
/// # Example
///
/// ```rust
/// use thickm::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(201, HashMap::new(), json!({"_id": "1"}));
/// assert!(response.is_ok());
/// assert_eq!(response.status_text, "Created");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The reason phrase for the status code.
    pub status_text: String,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with the canonical reason phrase for `code`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let status_text = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self {
            code,
            status_text,
            headers,
            body,
        }
    }

    /// Creates a response with an empty header map.
    #[must_use]
    pub fn with_body(code: u16, body: serde_json::Value) -> Self {
        Self::new(code, HashMap::new(), body)
    }

    /// Overrides the reason phrase.
    #[must_use]
    pub fn status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = text.into();
        self
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
