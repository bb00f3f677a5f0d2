//! Dirty tracking for partial updates.
//!
//! This module provides [`TrackedResource<R>`], a wrapper that remembers the
//! JSON form of a resource as last loaded or saved. Saving a persisted
//! tracked resource with PATCH sends only the fields that changed since
//! then. With PUT the full record is sent.
//!
//! # How It Works
//!
//! When a resource is loaded from the server or after a successful save,
//! its JSON form is captured. On the next save, the outgoing payload is
//! compared with that snapshot and only differing fields are sent. Nested
//! objects are compared field by field; removed fields are not sent.
//!
//! # Example
//!
//! ```rust
//! use thickm::rest::{DefaultLayout, Resource, TrackedResource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//!     email: String,
//! }
//!
//! impl Resource for User {
//!     type Layout = DefaultLayout;
//!     const NAME: &'static str = "users";
//! }
//!
//! let user = User { id: 1, name: "a".to_string(), email: "a@x".to_string() };
//! let mut tracked = TrackedResource::from_existing(user);
//! assert!(!tracked.is_dirty());
//!
//! tracked.name = "b".to_string();
//! assert!(tracked.is_dirty());
//!
//! let changes = tracked.changed_fields();
//! assert!(changes.get("name").is_some());
//! assert!(changes.get("email").is_none());
//! ```

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::clients::{RestClient, Transport};
use crate::config::UpdateMethod;
use crate::rest::{Resource, ResourceError};

/// A resource wrapper that tracks changes since the last load or save.
///
/// # Deref Pattern
///
/// Implements `Deref<Target = R>` and `DerefMut`, so fields are read and
/// written as on the resource itself. Writes through `DerefMut` show up in
/// [`is_dirty`](Self::is_dirty).
#[derive(Debug, Clone)]
pub struct TrackedResource<R> {
    resource: R,
    /// `None` until the resource has been loaded or saved.
    original_state: Option<Value>,
}

impl<R: Resource> TrackedResource<R> {
    /// Wraps a resource that has not been stored yet.
    ///
    /// There is no snapshot, so the resource is dirty and every field
    /// counts as changed.
    #[must_use]
    pub const fn new(resource: R) -> Self {
        Self {
            resource,
            original_state: None,
        }
    }

    /// Wraps a resource loaded from the server, capturing its current state.
    #[must_use]
    pub fn from_existing(resource: R) -> Self {
        let original_state = serde_json::to_value(&resource).ok();
        Self {
            resource,
            original_state,
        }
    }

    /// Returns `true` if the resource differs from its snapshot.
    ///
    /// Always `true` without a snapshot.
    #[must_use]
    #[allow(clippy::option_if_let_else)]
    pub fn is_dirty(&self) -> bool {
        match &self.original_state {
            None => true,
            Some(original) => {
                let current = serde_json::to_value(&self.resource).ok();
                current.as_ref() != Some(original)
            }
        }
    }

    /// Returns the fields that differ from the snapshot.
    ///
    /// Without a snapshot, returns the whole JSON form.
    #[must_use]
    pub fn changed_fields(&self) -> Value {
        let current = serde_json::to_value(&self.resource).unwrap_or(Value::Null);
        self.diff_against_snapshot(current)
    }

    /// Captures the current state as the new snapshot.
    pub fn mark_clean(&mut self) {
        self.original_state = serde_json::to_value(&self.resource).ok();
    }

    /// Saves the resource, sending only changed fields when it is persisted.
    ///
    /// New resources are created exactly as by [`Resource::save`]. Persisted
    /// resources updated with PATCH send the fields of
    /// [`transform_item_request`](Resource::transform_item_request)'s output
    /// that differ from the snapshot. PUT replaces the whole record, so it
    /// always sends the full output. On success the response is merged and
    /// the snapshot is refreshed.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Resource::save`]. The snapshot is kept on
    /// failure, so the same changes are sent on the next attempt.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut user = TrackedResource::from_existing(User::get(&client, 1, None).await?);
    /// user.name = "b".to_string();
    /// user.save(&client).await?; // PATCH {"name": "b"}
    /// ```
    pub async fn save<T: Transport>(&mut self, client: &RestClient<T>) -> Result<(), ResourceError> {
        if self.resource.is_new() {
            self.resource.save(client).await?;
            self.mark_clean();
            return Ok(());
        }

        let config = client.config();
        let url = self.resource.resource_url(config)?;
        let mut headers = config.update_headers().clone();
        let payload = self.resource.transform_item_request(&mut headers)?;
        let body = match config.update_method() {
            UpdateMethod::Patch => {
                tracing::debug!(resource = R::NAME, url = %url, "sending changed fields");
                self.diff_against_snapshot(payload)
            }
            UpdateMethod::Put => payload,
        };

        let response = client.update(&url, body, &headers).await?;
        self.resource.update(response.body)?;
        self.mark_clean();
        Ok(())
    }

    /// Returns a reference to the inner resource.
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.resource
    }

    /// Returns a mutable reference to the inner resource.
    #[must_use]
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.resource
    }

    /// Consumes the wrapper and returns the inner resource.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.resource
    }

    fn diff_against_snapshot(&self, current: Value) -> Value {
        match &self.original_state {
            None => current,
            Some(original) => diff_json_objects(original, &current),
        }
    }
}

/// Returns the fields of `current` that differ from `original`.
///
/// Nested objects are diffed recursively. Fields missing from `current`
/// are not reported.
fn diff_json_objects(original: &Value, current: &Value) -> Value {
    match (original, current) {
        (Value::Object(orig_map), Value::Object(curr_map)) => {
            let mut diff = serde_json::Map::new();

            for (key, curr_value) in curr_map {
                match orig_map.get(key) {
                    Some(orig_value) if orig_value == curr_value => {}
                    Some(orig_value) if orig_value.is_object() && curr_value.is_object() => {
                        let nested = diff_json_objects(orig_value, curr_value);
                        if nested.as_object().is_some_and(|m| !m.is_empty()) {
                            diff.insert(key.clone(), nested);
                        }
                    }
                    _ => {
                        diff.insert(key.clone(), curr_value.clone());
                    }
                }
            }

            Value::Object(diff)
        }
        _ => {
            if original == current {
                Value::Null
            } else {
                current.clone()
            }
        }
    }
}

impl<R> Deref for TrackedResource<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<R> DerefMut for TrackedResource<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.resource
    }
}

// Verify TrackedResource is Send + Sync when R is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TrackedResource<String>>();
};
