//! REST client implementation.
//!
//! This module provides the [`RestClient`] type, the entry point passed to
//! every [`Resource`](crate::rest::Resource) operation.

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    QueryParams, Transport,
};
use crate::config::ThickmConfig;

/// REST client combining configuration with a transport.
///
/// Provides `get`, `post`, `update` and `delete` methods over absolute URLs.
/// Responses outside the 2xx range are returned as
/// [`HttpError::Response`] wrapped in [`RestError::Http`]; nothing is retried.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` when its transport is.
///
/// # Example
///
/// ```rust,ignore
/// use thickm::{RestClient, ThickmConfig};
/// use serde_json::json;
///
/// let client = RestClient::new(ThickmConfig::default())?;
///
/// let response = client.get("/items", None).await?;
///
/// let headers = client.config().create_headers().clone();
/// let response = client.post("/items", json!({"name": "a"}), &headers).await?;
/// ```
#[derive(Debug)]
pub struct RestClient<T = HttpClient> {
    config: ThickmConfig,
    transport: T,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<HttpClient> {
    /// Creates a new REST client backed by a reqwest [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: ThickmConfig) -> Result<Self, RestError> {
        let transport = HttpClient::new(Some(&config))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a REST client over a caller-supplied transport.
    #[must_use]
    pub const fn with_transport(config: ThickmConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ThickmConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a GET request.
    ///
    /// Empty parameter lists are not appended to the URL.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidUrl`] if the URL is invalid and
    /// [`RestError::Http`] for transport errors and non-2xx responses.
    pub async fn get(
        &self,
        url: &str,
        query: Option<&QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        let query = query.filter(|q| !q.is_empty()).cloned();
        self.make_request(HttpMethod::Get, url, None, query, None)
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidUrl`] if the URL is invalid and
    /// [`RestError::Http`] for transport errors and non-2xx responses.
    pub async fn post(
        &self,
        url: &str,
        body: serde_json::Value,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, url, Some(body), None, Some(headers))
            .await
    }

    /// Sends an update request using the configured verb (PUT or PATCH).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidUrl`] if the URL is invalid and
    /// [`RestError::Http`] for transport errors and non-2xx responses.
    pub async fn update(
        &self,
        url: &str,
        body: serde_json::Value,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, RestError> {
        let method = self.config.update_method().http_method();
        self.make_request(method, url, Some(body), None, Some(headers))
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidUrl`] if the URL is invalid and
    /// [`RestError::Http`] for transport errors and non-2xx responses.
    pub async fn delete(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, url, None, None, Some(headers))
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<serde_json::Value>,
        query: Option<QueryParams>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        validate_url(url)?;

        let mut builder = HttpRequest::builder(method, url);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        if let Some(headers) = headers {
            builder = builder.headers(headers.clone());
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        tracing::debug!(method = %method, url = %request.url_with_query(), "sending request");

        let response = self.transport.send(request).await?;

        if !response.is_ok() {
            tracing::warn!(
                method = %method,
                url = %url,
                status = response.code,
                "request failed"
            );
            return Err(RestError::Http(HttpError::Response(
                HttpResponseError::from_response(response),
            )));
        }

        Ok(response)
    }
}

fn validate_url(url: &str) -> Result<(), RestError> {
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return Err(RestError::InvalidUrl {
            url: url.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::RecordingTransport;
    use crate::config::UpdateMethod;
    use serde_json::json;

    fn client_with(config: ThickmConfig) -> RestClient<RecordingTransport> {
        RestClient::with_transport(config, RecordingTransport::new())
    }

    #[tokio::test]
    async fn test_get_sends_query_params() {
        let client = client_with(ThickmConfig::default());
        let query = QueryParams::new().with("a", "b");

        client.get("http://fake", Some(&query)).await.unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].http_method, HttpMethod::Get);
        assert_eq!(sent[0].url, "http://fake");
        assert_eq!(sent[0].query, Some(query));
    }

    #[tokio::test]
    async fn test_get_drops_empty_query() {
        let client = client_with(ThickmConfig::default());

        client
            .get("http://fake", Some(&QueryParams::new()))
            .await
            .unwrap();

        assert!(client.transport().requests()[0].query.is_none());
    }

    #[tokio::test]
    async fn test_post_sends_json_body_and_headers() {
        let client = client_with(ThickmConfig::default());
        let headers = client.config().create_headers().clone();

        client
            .post("/items", json!({"name": "a"}), &headers)
            .await
            .unwrap();

        let sent = &client.transport().requests()[0];
        assert_eq!(sent.http_method, HttpMethod::Post);
        assert_eq!(sent.body, Some(json!({"name": "a"})));
        assert_eq!(sent.body_type, Some(DataType::Json));
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_update_uses_patch_by_default() {
        let client = client_with(ThickmConfig::default());
        let headers = client.config().update_headers().clone();

        client.update("/items/1", json!({}), &headers).await.unwrap();

        assert_eq!(
            client.transport().requests()[0].http_method,
            HttpMethod::Patch
        );
    }

    #[tokio::test]
    async fn test_update_uses_configured_put() {
        let config = ThickmConfig::builder()
            .update_method(UpdateMethod::Put)
            .build()
            .unwrap();
        let client = client_with(config);
        let headers = client.config().update_headers().clone();

        client.update("/items/1", json!({}), &headers).await.unwrap();

        assert_eq!(client.transport().requests()[0].http_method, HttpMethod::Put);
    }

    #[tokio::test]
    async fn test_non_2xx_response_is_an_error() {
        let client = client_with(ThickmConfig::default());
        client
            .transport()
            .push_response(HttpResponse::with_body(401, json!({"error": "denied"})));

        let result = client.get("/items/a", None).await;

        match result {
            Err(RestError::Http(HttpError::Response(e))) => {
                assert_eq!(e.code, 401);
                assert_eq!(e.body, json!({"error": "denied"}));
            }
            other => panic!("Expected response error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_sending() {
        let client = client_with(ThickmConfig::default());

        let result = client.get("", None).await;

        assert!(matches!(result, Err(RestError::InvalidUrl { .. })));
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("/items").is_ok());
        assert!(validate_url("http://api.x/users/1").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("/items/a b").is_err());
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
        assert_send_sync::<RestClient<RecordingTransport>>();
    }
}
