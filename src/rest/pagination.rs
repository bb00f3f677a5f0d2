//! Page-number pagination metadata.
//!
//! Paginated APIs commonly describe a page in the collection metadata:
//!
//! ```json
//! {"_items": [...], "_meta": {"total": 42, "page": 2, "max_results": 25}}
//! ```
//!
//! [`PageMeta`] reads that object and answers whether another page exists.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::QueryParams;

/// Page position read from a collection's metadata.
///
/// # Example
///
/// ```rust
/// use thickm::rest::PageMeta;
///
/// let meta = PageMeta { total: 42, page: 1, max_results: 25 };
/// assert!(meta.has_next());
/// assert_eq!(meta.next_page(), Some(2));
///
/// let last = PageMeta { total: 42, page: 2, max_results: 25 };
/// assert!(!last.has_next());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of items across all pages.
    pub total: u64,
    /// The current page, starting at 1.
    pub page: u64,
    /// Page size.
    pub max_results: u64,
}

impl PageMeta {
    /// Reads `total`, `page` and `max_results` from a metadata object.
    ///
    /// Returns `None` if any of them is missing or not a non-negative integer.
    #[must_use]
    pub fn from_meta(meta: &Map<String, Value>) -> Option<Self> {
        let field = |name: &str| meta.get(name).and_then(Value::as_u64);
        Some(Self {
            total: field("total")?,
            page: field("page")?,
            max_results: field("max_results")?,
        })
    }

    /// Returns `true` if items remain after the current page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page.saturating_mul(self.max_results) < self.total
    }

    /// Returns the next page number, if there is one.
    #[must_use]
    pub const fn next_page(&self) -> Option<u64> {
        if self.has_next() {
            Some(self.page + 1)
        } else {
            None
        }
    }

    /// Returns `page` and `max_results` parameters for the next page.
    #[must_use]
    pub fn next_query(&self) -> Option<QueryParams> {
        self.next_page().map(|page| {
            QueryParams::new()
                .with("page", page.to_string())
                .with("max_results", self.max_results.to_string())
        })
    }
}
