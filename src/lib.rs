//! # thickm
//!
//! A thin model layer for REST APIs: turn JSON endpoints into typed
//! resources and paginated collections.
//!
//! ## Overview
//!
//! This library provides:
//! - Type-safe configuration via [`ThickmConfig`] and [`ThickmConfigBuilder`]
//! - The [`Resource`] trait: `query`, `get`, `save`, `delete` and URL helpers
//!   for any serde record, with overridable transform hooks
//! - [`Collection`]: resources plus response metadata, shaped by a
//!   [`CollectionLayout`]
//! - Partial updates through [`TrackedResource`]
//! - An async [`RestClient`] over a pluggable [`Transport`], with a reqwest
//!   implementation in [`HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use thickm::{BaseUrl, ThickmConfig, UpdateMethod};
//!
//! // Create configuration using the builder pattern
//! let config = ThickmConfig::builder()
//!     .base_url(BaseUrl::new("http://coolapp.com/api/v1/").unwrap())
//!     .update_method(UpdateMethod::Patch)
//!     .write_header("X-Requested-With", "thickm")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Defining a Model
//!
//! ```rust
//! use thickm::{DefaultLayout, Resource, ThickmConfig, BaseUrl};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct User {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     id: Option<String>,
//!     name: String,
//! }
//!
//! impl Resource for User {
//!     type Layout = DefaultLayout;
//!     const NAME: &'static str = "users";
//!     const PRIMARY_FIELD: &'static str = "_id";
//! }
//!
//! let config = ThickmConfig::builder()
//!     .base_url(BaseUrl::new("http://api.x/").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let user = User { id: None, name: "a".to_string() };
//! assert!(user.is_new());
//! assert_eq!(User::collection_url(&config), "http://api.x/users");
//! assert_eq!(User::url_for(&config, "1"), "http://api.x/users/1");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use thickm::{RestClient, Resource, ResultCallbacks};
//!
//! let client = RestClient::new(config)?;
//!
//! let users = User::query(&client, None).await?;
//! let mut user = User::get(&client, "1", None).await?;
//!
//! user.name = "b".to_string();
//! user.save(&client)
//!     .await
//!     .on_error(|e| tracing::warn!(error = %e, "save failed"))?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Thread-safe**: Clients and collections are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No translation**: Failure responses reach the caller as received

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, ThickmConfig, ThickmConfigBuilder, UpdateMethod};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, QueryParams, RestClient, RestError, Transport,
};

// Re-export model types
pub use rest::{
    Collection, CollectionLayout, DefaultLayout, PageMeta, Resource, ResourceError,
    ResultCallbacks, TrackedResource,
};
