//! # Domain Types
//!
//! Core domain types used throughout the catalog.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductDraft   │   │  PageResult<T>  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store)     │   │  no id          │   │  items          │       │
//! │  │  name, type     │   │  write payload  │   │  totalCount     │       │
//! │  │  brand, price   │   │  for create /   │   │  currentPage    │       │
//! │  │  stock, image   │   │  full update    │   │  totalPages     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │   SortOrder     │  Unspecified (id ASC) | Ascending | Descending    │
//! │  └─────────────────┘  (by price)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog, as read from the store.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Store-assigned primary key (positive).
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Product kind, e.g. "conifer" or "hand tool". Exact-match filterable.
    #[serde(rename = "type")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub product_type: String,

    /// Manufacturer or nursery. Exact-match filterable.
    pub brand: String,

    /// Free text description.
    pub description: String,

    /// Unit price, stored as cents.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "price_cents"))]
    #[ts(type = "string")]
    pub price: Money,

    /// Units on hand (non-negative).
    pub stock: i64,

    /// Opaque image reference (URL or path), never validated.
    pub image: String,
}

/// The writable fields of a product.
///
/// Built by the transport layer from a create/update body once
/// [`crate::validation::validate_draft`] has accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub brand: String,
    pub description: String,
    #[ts(type = "string")]
    pub price: Money,
    pub stock: i64,
    pub image: String,
}

impl ProductDraft {
    /// Attaches a store-assigned id, producing the read model.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            product_type: self.product_type,
            brand: self.brand,
            description: self.description,
            price: self.price,
            stock: self.stock,
            image: self.image,
        }
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Requested ordering of a catalog page.
///
/// Ascending and descending sort by price. Unspecified falls back to
/// ascending id so the default order never depends on storage iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortOrder {
    #[default]
    Unspecified,
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Wire tokens accepted for `sortOrder`.
    pub const ALLOWED: [&'static str; 2] = ["asc", "desc"];

    /// Parses a wire token. Absent and empty both mean unspecified.
    ///
    /// Returns `None` for any other token; the caller turns that into a
    /// validation error.
    pub fn from_token(token: Option<&str>) -> Option<Self> {
        match token {
            None | Some("") => Some(SortOrder::Unspecified),
            Some("asc") => Some(SortOrder::Ascending),
            Some("desc") => Some(SortOrder::Descending),
            Some(_) => None,
        }
    }
}

// =============================================================================
// Page Result
// =============================================================================

/// One page of a filtered, sorted result set plus its count metadata.
///
/// ## Invariants
/// - `items.len() <= pageSize`
/// - `totalPages == ceil(totalCount / pageSize)` when `totalCount > 0`
/// - `totalCount == 0` implies `totalPages == 0` and `items` is empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl<T> PageResult<T> {
    /// The shape returned when nothing matched: echoes the requested page.
    pub fn empty(requested_page: u64) -> Self {
        PageResult {
            items: Vec::new(),
            total_count: 0,
            current_page: requested_page,
            total_pages: 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
