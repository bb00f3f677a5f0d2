//! Resource trait for CRUD operations.
//!
//! This module defines the [`Resource`] trait, which turns a serde record
//! into a model bound to a REST endpoint. Types that implement this trait
//! gain `query()`, `get()`, `save()`, `delete()` and URL helpers.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives
//! 2. Implement `Resource`, setting `NAME` and the collection `Layout`
//! 3. Override `PRIMARY_FIELD`, `BASE_URL` or any transform hook as needed
//!
//! # Example
//!
//! ```rust,ignore
//! use thickm::rest::{DefaultLayout, Resource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     pub id: Option<String>,
//!     pub name: String,
//! }
//!
//! impl Resource for User {
//!     type Layout = DefaultLayout;
//!
//!     const NAME: &'static str = "users";
//!     const PRIMARY_FIELD: &'static str = "_id";
//! }
//!
//! // Usage:
//! let users = User::query(&client, None).await?;
//! let mut user = User::get(&client, "1", None).await?;
//! user.name = "b".to_string();
//! user.save(&client).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, QueryParams, RestClient, Transport};
use crate::config::ThickmConfig;
use crate::rest::{Collection, CollectionLayout, ResourceError};

/// A remote entity type that can be queried, fetched, saved and deleted.
///
/// Every operation has a default implementation; implementors only name the
/// resource and pick a collection layout. The instance's JSON form is the
/// record exchanged with the server, and the value of [`PRIMARY_FIELD`] in
/// that form decides whether the instance is new or persisted.
///
/// # Associated Constants
///
/// - `NAME`: The collection URL segment (e.g., "users")
/// - `PRIMARY_FIELD`: Identity attribute in the JSON form (default `"id"`)
/// - `BASE_URL`: Per-type override of the configured base URL
///
/// # Transform Hooks
///
/// - [`validate`](Self::validate): accept or reject a payload before `build`
/// - [`transform_item_request`](Self::transform_item_request): outgoing body and headers
/// - [`transform_item_response`](Self::transform_item_response): response to instance
/// - [`transform_collection_response`](Self::transform_collection_response):
///   response to collection
///
/// [`PRIMARY_FIELD`]: Self::PRIMARY_FIELD
#[allow(async_fn_in_trait)]
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + Sized {
    /// The response shape of this resource's collections.
    type Layout: CollectionLayout;

    /// The resource name, appended to the base URL to form the collection URL.
    const NAME: &'static str;

    /// The attribute holding the instance's identity.
    const PRIMARY_FIELD: &'static str = "id";

    /// Base URL overriding [`ThickmConfig::base_url`] for this type.
    ///
    /// Must end with `/` when the name should form a new path segment.
    const BASE_URL: Option<&'static str> = None;

    /// Returns the collection URL: base URL followed by [`NAME`](Self::NAME).
    #[must_use]
    fn collection_url(config: &ThickmConfig) -> String {
        Self::BASE_URL.map_or_else(
            || config.base_url().join(Self::NAME),
            |base| format!("{base}{}", Self::NAME),
        )
    }

    /// Returns the item URL for an explicit id.
    ///
    /// The id is percent-encoded as a single path segment.
    #[must_use]
    fn url_for(config: &ThickmConfig, id: &str) -> String {
        format!(
            "{}/{}",
            Self::collection_url(config),
            urlencoding::encode(id)
        )
    }

    /// Returns the item URL of this instance.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingPrimaryKey`] if the instance is new.
    fn resource_url(&self, config: &ThickmConfig) -> Result<String, ResourceError> {
        let id = self
            .primary_key()
            .ok_or(ResourceError::MissingPrimaryKey {
                resource: Self::NAME,
                field: Self::PRIMARY_FIELD,
            })?;
        Ok(Self::url_for(config, &id))
    }

    /// Returns the primary field's value rendered as a URL segment.
    ///
    /// Strings are used verbatim, numbers and booleans via `Display`.
    /// Returns `None` when the field is absent or null.
    #[must_use]
    fn primary_key(&self) -> Option<String> {
        let value = serde_json::to_value(self).ok()?;
        value.get(Self::PRIMARY_FIELD).and_then(render_key)
    }

    /// Returns `true` if the instance has no primary key yet.
    #[must_use]
    fn is_new(&self) -> bool {
        self.primary_key().is_none()
    }

    /// Decides whether a payload may become an instance.
    ///
    /// The default accepts everything.
    #[must_use]
    fn validate(_data: &Value) -> bool {
        true
    }

    /// Builds an instance from a decoded payload.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidItem`] if [`validate`](Self::validate)
    /// rejects the payload, or [`ResourceError::Decode`] if it does not fit
    /// the type.
    fn build(data: Value) -> Result<Self, ResourceError> {
        if !Self::validate(&data) {
            return Err(ResourceError::InvalidItem {
                resource: Self::NAME,
                data,
            });
        }
        Ok(serde_json::from_value(data)?)
    }

    /// Merges the fields of `data` into this instance; incoming fields win.
    ///
    /// Payloads that are not JSON objects leave the instance untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the merged record does not fit
    /// the type.
    fn update(&mut self, data: Value) -> Result<(), ResourceError> {
        let Value::Object(incoming) = data else {
            return Ok(());
        };
        let mut current = serde_json::to_value(&*self)?;
        if let Value::Object(fields) = &mut current {
            fields.extend(incoming);
        }
        *self = serde_json::from_value(current)?;
        Ok(())
    }

    /// Produces the outgoing body for `save` and may adjust request headers.
    ///
    /// Also invoked by `delete` for its header side effects. The default
    /// returns the instance's JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the instance cannot be serialized.
    fn transform_item_request(
        &self,
        _headers: &mut HashMap<String, String>,
    ) -> Result<Value, ResourceError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Turns a single-item response into an instance.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`build`](Self::build).
    fn transform_item_response(response: HttpResponse) -> Result<Self, ResourceError> {
        Self::build(response.body)
    }

    /// Turns a list response into a collection.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Collection::build`].
    fn transform_collection_response(
        response: HttpResponse,
    ) -> Result<Collection<Self, Self::Layout>, ResourceError> {
        Collection::build(response)
    }

    /// Fetches the collection at the collection URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport failures and non-2xx
    /// responses, or the errors of
    /// [`transform_collection_response`](Self::transform_collection_response).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = QueryParams::new().with("page", "2");
    /// let users = User::query(&client, Some(&params)).await?;
    /// for user in users.iter() {
    ///     println!("{}", user.name);
    /// }
    /// ```
    async fn query<T: Transport>(
        client: &RestClient<T>,
        params: Option<&QueryParams>,
    ) -> Result<Collection<Self, Self::Layout>, ResourceError> {
        let url = Self::collection_url(client.config());
        Self::query_url(client, &url, params).await
    }

    /// Fetches a collection from an arbitrary URL.
    ///
    /// # Errors
    ///
    /// Same as [`query`](Self::query).
    async fn query_url<T: Transport>(
        client: &RestClient<T>,
        url: &str,
        params: Option<&QueryParams>,
    ) -> Result<Collection<Self, Self::Layout>, ResourceError> {
        let response = client.get(url, params).await?;
        Self::transform_collection_response(response)
    }

    /// Fetches a single instance by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport failures and non-2xx
    /// responses, or the errors of
    /// [`transform_item_response`](Self::transform_item_response).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let user = User::get(&client, "1", None).await?;
    /// ```
    async fn get<T: Transport>(
        client: &RestClient<T>,
        id: impl Display + Send,
        params: Option<&QueryParams>,
    ) -> Result<Self, ResourceError> {
        let url = Self::url_for(client.config(), &id.to_string());
        Self::get_url(client, &url, params).await
    }

    /// Fetches a single instance from an arbitrary URL.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    async fn get_url<T: Transport>(
        client: &RestClient<T>,
        url: &str,
        params: Option<&QueryParams>,
    ) -> Result<Self, ResourceError> {
        let response = client.get(url, params).await?;
        Self::transform_item_response(response)
    }

    /// Creates or updates the instance on the server.
    ///
    /// New instances are POSTed to the collection URL with the create
    /// headers. Persisted instances are sent to their item URL with the
    /// configured update verb and the update headers. A JSON object in the
    /// response is merged into the instance.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport failures and non-2xx
    /// responses; the instance is left unchanged in that case.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut user = User { id: None, name: "a".to_string() };
    /// user.save(&client).await?; // POST
    /// assert!(!user.is_new());
    ///
    /// user.name = "b".to_string();
    /// user.save(&client).await?; // PATCH
    /// ```
    async fn save<T: Transport>(&mut self, client: &RestClient<T>) -> Result<(), ResourceError> {
        let config = client.config();

        let response = if self.is_new() {
            let mut headers = config.create_headers().clone();
            let body = self.transform_item_request(&mut headers)?;
            client
                .post(&Self::collection_url(config), body, &headers)
                .await?
        } else {
            let url = self.resource_url(config)?;
            let mut headers = config.update_headers().clone();
            let body = self.transform_item_request(&mut headers)?;
            client.update(&url, body, &headers).await?
        };

        self.update(response.body)
    }

    /// Deletes the instance on the server and returns the response body.
    ///
    /// A new instance was never stored remotely, so this returns an empty
    /// JSON object without sending anything. The instance itself is not
    /// modified either way.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport failures and non-2xx
    /// responses.
    async fn delete<T: Transport>(&self, client: &RestClient<T>) -> Result<Value, ResourceError> {
        if self.is_new() {
            tracing::debug!(resource = Self::NAME, "skipping delete of unsaved instance");
            return Ok(Value::Object(serde_json::Map::new()));
        }

        let config = client.config();
        let url = self.resource_url(config)?;
        let mut headers = config.delete_headers().clone();
        self.transform_item_request(&mut headers)?;

        let response = client.delete(&url, &headers).await?;
        Ok(response.body)
    }
}

fn render_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::RecordingTransport;
    use crate::clients::HttpMethod;
    use crate::config::BaseUrl;
    use crate::rest::DefaultLayout;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct User {
        #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        name: String,
        #[serde(flatten)]
        extra: serde_json::Map<String, Value>,
    }

    impl Resource for User {
        type Layout = DefaultLayout;

        const NAME: &'static str = "users";
        const PRIMARY_FIELD: &'static str = "_id";
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Item {
        #[serde(default)]
        id: Option<u64>,
        title: String,
    }

    impl Resource for Item {
        type Layout = DefaultLayout;

        const NAME: &'static str = "items";

        fn validate(data: &Value) -> bool {
            data.get("title")
                .and_then(Value::as_str)
                .is_some_and(|t| !t.is_empty())
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Widget {
        id: Option<u64>,
    }

    impl Resource for Widget {
        type Layout = DefaultLayout;

        const NAME: &'static str = "widgets";
        const BASE_URL: Option<&'static str> = Some("http://other.x/v2/");
    }

    fn config() -> ThickmConfig {
        ThickmConfig::builder()
            .base_url(BaseUrl::new("http://api.x/").unwrap())
            .build()
            .unwrap()
    }

    fn client() -> RestClient<RecordingTransport> {
        RestClient::with_transport(config(), RecordingTransport::new())
    }

    fn user(id: Option<&str>, name: &str) -> User {
        User {
            id: id.map(ToString::to_string),
            name: name.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_collection_url_joins_base_and_name() {
        assert_eq!(User::collection_url(&config()), "http://api.x/users");
        assert_eq!(
            Item::collection_url(&ThickmConfig::default()),
            "/items"
        );
    }

    #[test]
    fn test_base_url_override_wins_over_config() {
        assert_eq!(
            Widget::collection_url(&config()),
            "http://other.x/v2/widgets"
        );
    }

    #[test]
    fn test_url_for_appends_id() {
        assert_eq!(User::url_for(&config(), "1"), "http://api.x/users/1");
    }

    #[test]
    fn test_url_for_encodes_reserved_characters() {
        assert_eq!(
            User::url_for(&config(), "a/b?x=1"),
            "http://api.x/users/a%2Fb%3Fx%3D1"
        );
        assert_eq!(User::url_for(&config(), "a b"), "http://api.x/users/a%20b");
    }

    #[test]
    fn test_resource_url_uses_primary_field() {
        let persisted = user(Some("abc"), "a");

        assert_eq!(
            persisted.resource_url(&config()).unwrap(),
            "http://api.x/users/abc"
        );
    }

    #[test]
    fn test_resource_url_fails_without_primary_key() {
        let result = user(None, "a").resource_url(&config());

        assert!(matches!(
            result,
            Err(ResourceError::MissingPrimaryKey {
                resource: "users",
                field: "_id"
            })
        ));
    }

    #[test]
    fn test_is_new_follows_primary_field() {
        assert!(user(None, "a").is_new());
        assert!(!user(Some("1"), "a").is_new());

        let item = Item {
            id: Some(7),
            title: "t".to_string(),
        };
        assert_eq!(item.primary_key(), Some("7".to_string()));
    }

    #[test]
    fn test_null_primary_field_counts_as_new() {
        let item = Item {
            id: None,
            title: "t".to_string(),
        };

        assert!(item.is_new());
    }

    #[test]
    fn test_build_keeps_payload_fields() {
        let built = User::build(json!({"_id": "1", "name": "a", "age": 3})).unwrap();

        assert_eq!(built.id.as_deref(), Some("1"));
        assert_eq!(built.name, "a");
        assert_eq!(built.extra.get("age"), Some(&json!(3)));
    }

    #[test]
    fn test_build_rejects_invalid_payload() {
        let result = Item::build(json!({"title": ""}));

        match result {
            Err(ResourceError::InvalidItem { resource, data }) => {
                assert_eq!(resource, "items");
                assert_eq!(data, json!({"title": ""}));
            }
            other => panic!("Expected InvalidItem, got {other:?}"),
        }
    }

    #[test]
    fn test_build_reports_decode_errors() {
        let result = Item::build(json!({"title": "t", "id": "not a number"}));

        assert!(matches!(result, Err(ResourceError::Decode(_))));
    }

    #[test]
    fn test_update_merges_with_incoming_fields_winning() {
        let mut persisted = user(Some("1"), "a");

        persisted
            .update(json!({"name": "b", "role": "admin"}))
            .unwrap();

        assert_eq!(persisted.id.as_deref(), Some("1"));
        assert_eq!(persisted.name, "b");
        assert_eq!(persisted.extra.get("role"), Some(&json!("admin")));
    }

    #[test]
    fn test_update_ignores_non_object_payloads() {
        let mut persisted = user(Some("1"), "a");

        persisted.update(json!("ok")).unwrap();

        assert_eq!(persisted, user(Some("1"), "a"));
    }

    #[tokio::test]
    async fn test_save_new_instance_posts_to_collection_url() {
        let client = client();
        client
            .transport()
            .push_response(HttpResponse::with_body(201, json!({"_id": "1"})));
        let mut fresh = user(None, "a");

        fresh.save(&client).await.unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].http_method, HttpMethod::Post);
        assert_eq!(sent[0].url, "http://api.x/users");
        assert_eq!(sent[0].body, Some(json!({"name": "a"})));
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        assert_eq!(fresh.id.as_deref(), Some("1"));
        assert!(!fresh.is_new());
    }

    #[tokio::test]
    async fn test_save_persisted_instance_updates_item_url() {
        let client = client();
        client.transport().push_response(HttpResponse::with_body(
            200,
            json!({"name": "server", "updated": true}),
        ));
        let mut persisted = user(Some("1"), "a");

        persisted.save(&client).await.unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent[0].http_method, HttpMethod::Patch);
        assert_eq!(sent[0].url, "http://api.x/users/1");
        assert_eq!(persisted.name, "server");
        assert_eq!(persisted.extra.get("updated"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn test_failed_save_leaves_instance_unchanged() {
        let client = client();
        client
            .transport()
            .push_response(HttpResponse::with_body(422, json!({"name": "taken"})));
        let mut fresh = user(None, "a");

        let result = fresh.save(&client).await;

        assert_eq!(result.unwrap_err().status(), Some(422));
        assert_eq!(fresh, user(None, "a"));
    }

    #[test]
    fn test_delete_new_instance_skips_transport() {
        let client = client();

        let result = tokio_test::block_on(user(None, "a").delete(&client)).unwrap();

        assert_eq!(result, json!({}));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_persisted_instance_sends_delete() {
        let client = client();
        client
            .transport()
            .push_response(HttpResponse::with_body(200, json!({"deleted": true})));
        let persisted = user(Some("1"), "a");

        let result = persisted.delete(&client).await.unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent[0].http_method, HttpMethod::Delete);
        assert_eq!(sent[0].url, "http://api.x/users/1");
        assert_eq!(sent[0].body, None);
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        assert_eq!(result, json!({"deleted": true}));
        assert_eq!(persisted.id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_get_builds_instance_from_body() {
        let client = client();
        client
            .transport()
            .push_response(HttpResponse::with_body(200, json!({"_id": "1", "name": "a"})));

        let fetched = User::get(&client, "1", None).await.unwrap();

        assert_eq!(fetched, user(Some("1"), "a"));
        let sent = client.transport().requests();
        assert_eq!(sent[0].http_method, HttpMethod::Get);
        assert_eq!(sent[0].url, "http://api.x/users/1");
    }

    #[tokio::test]
    async fn test_get_surfaces_unauthorized_response() {
        let client = client();
        client
            .transport()
            .push_response(HttpResponse::with_body(401, json!({"error": "login"})));

        let error = User::get(&client, "a", None).await.unwrap_err();

        assert_eq!(error.status(), Some(401));
        assert_eq!(
            error.response().map(|r| r.body.clone()),
            Some(json!({"error": "login"}))
        );
    }

    #[tokio::test]
    async fn test_query_builds_collection_with_params() {
        let client = client();
        client.transport().push_response(HttpResponse::with_body(
            200,
            json!([{"_id": "1", "name": "a"}, {"_id": "2", "name": "b"}]),
        ));
        let params = QueryParams::new().with("page", "2");

        let users = User::query(&client, Some(&params)).await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "a");
        assert_eq!(users[1].name, "b");
        let sent = client.transport().requests();
        assert_eq!(sent[0].url, "http://api.x/users");
        assert_eq!(sent[0].query.as_ref().and_then(|q| q.get("page")), Some("2"));
    }

    #[tokio::test]
    async fn test_query_url_uses_given_url() {
        let client = client();
        client
            .transport()
            .push_response(HttpResponse::with_body(200, json!([])));

        let users = User::query_url(&client, "http://api.x/groups/1/users", None)
            .await
            .unwrap();

        assert!(users.is_empty());
        assert_eq!(
            client.transport().requests()[0].url,
            "http://api.x/groups/1/users"
        );
    }
}
