//! Model layer: resources and collections over REST endpoints.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: CRUD operations, URL helpers and transform hooks
//! - **[`Collection<R, L>`]**: A Deref-based list of resources plus metadata
//! - **[`CollectionLayout`]**: Where a list response keeps items and metadata
//! - **[`TrackedResource<R>`]**: Dirty tracking for partial updates
//! - **[`PageMeta`]**: Page-number pagination read from collection metadata
//! - **[`ResultCallbacks`]**: `on_success`/`on_error` handlers on results
//! - **[`ResourceError`]**: Error types for model operations
//!
//! # Example: Defining and Using a Resource
//!
//! ```rust,ignore
//! use thickm::{BaseUrl, RestClient, ThickmConfig};
//! use thickm::rest::{CollectionLayout, Resource, TrackedResource};
//! use serde::{Deserialize, Serialize};
//!
//! pub struct ApiLayout;
//!
//! impl CollectionLayout for ApiLayout {
//!     const ITEMS_FIELD: Option<&'static str> = Some("_items");
//!     const META_FIELD: Option<&'static str> = Some("_meta");
//! }
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     pub id: Option<String>,
//!     pub name: String,
//! }
//!
//! impl Resource for User {
//!     type Layout = ApiLayout;
//!     const NAME: &'static str = "users";
//!     const PRIMARY_FIELD: &'static str = "_id";
//! }
//!
//! let config = ThickmConfig::builder()
//!     .base_url(BaseUrl::new("http://api.x/")?)
//!     .build()?;
//! let client = RestClient::new(config)?;
//!
//! // List users (GET http://api.x/users)
//! let users = User::query(&client, None).await?;
//! for user in users.iter() {
//!     println!("- {}", user.name);
//! }
//! if users.page_meta().is_some_and(|m| m.has_next()) {
//!     // Fetch next page...
//! }
//!
//! // Create (POST http://api.x/users)
//! let mut user = User { id: None, name: "a".to_string() };
//! user.save(&client).await?;
//!
//! // Partial update (PATCH http://api.x/users/{id} with {"name": "b"})
//! let mut tracked = TrackedResource::from_existing(user);
//! tracked.name = "b".to_string();
//! tracked.save(&client).await?;
//!
//! // Delete (DELETE http://api.x/users/{id})
//! tracked.delete(&client).await?;
//! ```

mod callbacks;
mod collection;
mod errors;
mod pagination;
mod resource;
mod tracking;

// Public exports
pub use callbacks::ResultCallbacks;
pub use collection::{Collection, CollectionLayout, DefaultLayout};
pub use errors::ResourceError;
pub use pagination::PageMeta;
pub use resource::Resource;
pub use tracking::TrackedResource;
