//! Collections of resources built from list responses.
//!
//! This module provides [`Collection<R, L>`], an ordered list of resources
//! plus the metadata object that accompanied them, and the
//! [`CollectionLayout`] trait describing where a response keeps each part.
//!
//! # Deref Pattern
//!
//! `Collection<R, L>` implements `Deref<Target = Vec<R>>`, so it can be used
//! like the list itself:
//!
//! ```rust,ignore
//! let users = User::query(&client, None).await?;
//!
//! for user in users.iter() {
//!     println!("{}", user.name);
//! }
//! println!("Count: {}", users.len());
//! let first = &users[0];
//! ```
//!
//! # Layouts
//!
//! A layout names the items field and the meta field of a list response.
//! [`DefaultLayout`] expects the body to be the item array and looks for
//! metadata under a `meta` key, which a bare array never has. APIs that wrap
//! their lists declare their own:
//!
//! ```rust
//! use thickm::rest::CollectionLayout;
//!
//! pub struct EveLayout;
//!
//! impl CollectionLayout for EveLayout {
//!     const ITEMS_FIELD: Option<&'static str> = Some("_items");
//!     const META_FIELD: Option<&'static str> = Some("_meta");
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use serde_json::{Map, Value};

use crate::clients::{HttpResponse, QueryParams, RestClient, Transport};
use crate::rest::{PageMeta, Resource, ResourceError};

/// Where a list response keeps its items and its metadata.
pub trait CollectionLayout: Send + Sync + 'static {
    /// Field holding the item array. `None` means the body is the array.
    const ITEMS_FIELD: Option<&'static str> = None;

    /// Field holding the metadata object. `None` means there is none.
    const META_FIELD: Option<&'static str> = Some("meta");
}

/// Layout for responses whose body is the item array itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultLayout;

impl CollectionLayout for DefaultLayout {}

/// An ordered list of resources and the metadata sent with them.
///
/// Items keep the order of the response. The item type `R` is retained so
/// the collection can re-query its endpoint with [`Collection::query`].
///
/// # Type Parameters
///
/// * `R` - The resource type of the items
/// * `L` - The response layout, [`DefaultLayout`] unless the resource names
///   another one
pub struct Collection<R, L = DefaultLayout> {
    items: Vec<R>,
    meta: Map<String, Value>,
    layout: PhantomData<fn() -> L>,
}

impl<R, L> Collection<R, L> {
    /// Creates a collection from items and metadata.
    #[must_use]
    pub const fn new(items: Vec<R>, meta: Map<String, Value>) -> Self {
        Self {
            items,
            meta,
            layout: PhantomData,
        }
    }

    /// Returns the metadata object (empty when the response had none).
    #[must_use]
    pub const fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }

    /// Returns a mutable reference to the metadata object.
    #[must_use]
    pub fn meta_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.meta
    }

    /// Reads `total`, `page` and `max_results` from the metadata.
    ///
    /// Returns `None` unless all three are present as non-negative integers.
    #[must_use]
    pub fn page_meta(&self) -> Option<PageMeta> {
        PageMeta::from_meta(&self.meta)
    }

    /// Consumes the collection and returns the items as a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<R> {
        self.items
    }

    /// Consumes the collection and returns items and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<R>, Map<String, Value>) {
        (self.items, self.meta)
    }
}

impl<R: Resource, L: CollectionLayout> Collection<R, L> {
    /// Builds each raw item of the response with [`Resource::build`].
    ///
    /// Consumes the response; the items are moved out of its body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedCollection`] if the items field is
    /// missing or not an array, or the first error of [`Resource::build`].
    pub fn items_from_response(response: HttpResponse) -> Result<Vec<R>, ResourceError> {
        let mut body = response.body;
        let raw = match L::ITEMS_FIELD {
            None => Some(body),
            Some(field) => body.get_mut(field).map(Value::take),
        };

        let Some(Value::Array(items)) = raw else {
            return Err(ResourceError::MalformedCollection {
                resource: R::NAME,
                field: L::ITEMS_FIELD.unwrap_or("<body>").to_string(),
            });
        };

        items.into_iter().map(R::build).collect()
    }

    /// Returns the metadata object of the response.
    ///
    /// Empty when the layout has no meta field or the response lacks an
    /// object there.
    #[must_use]
    pub fn meta_from_response(response: &HttpResponse) -> Map<String, Value> {
        L::META_FIELD
            .and_then(|field| response.body.get(field))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }

    /// Builds a collection from a list response.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`items_from_response`](Self::items_from_response).
    pub fn build(response: HttpResponse) -> Result<Self, ResourceError> {
        let meta = Self::meta_from_response(&response);
        let items = Self::items_from_response(response)?;
        Ok(Self::new(items, meta))
    }

    /// Queries the item type's collection URL again.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Resource::query`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let first = User::query(&client, None).await?;
    /// if let Some(next) = first.page_meta().and_then(|m| m.next_query()) {
    ///     let second = first.query(&client, Some(&next)).await?;
    /// }
    /// ```
    pub async fn query<T: Transport>(
        &self,
        client: &RestClient<T>,
        params: Option<&QueryParams>,
    ) -> Result<Collection<R, R::Layout>, ResourceError> {
        R::query(client, params).await
    }
}

impl<R, L> Default for Collection<R, L> {
    fn default() -> Self {
        Self::new(Vec::new(), Map::new())
    }
}

impl<R: Clone, L> Clone for Collection<R, L> {
    fn clone(&self) -> Self {
        Self::new(self.items.clone(), self.meta.clone())
    }
}

impl<R: fmt::Debug, L> fmt::Debug for Collection<R, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.items)
            .field("meta", &self.meta)
            .finish()
    }
}

impl<R: PartialEq, L> PartialEq for Collection<R, L> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.meta == other.meta
    }
}

impl<R, L> Deref for Collection<R, L> {
    type Target = Vec<R>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<R, L> DerefMut for Collection<R, L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<R, L> IntoIterator for Collection<R, L> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, R, L> IntoIterator for &'a Collection<R, L> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<R, L> From<Collection<R, L>> for Vec<R> {
    fn from(collection: Collection<R, L>) -> Self {
        collection.items
    }
}

// Verify Collection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Collection<String>>();
};
