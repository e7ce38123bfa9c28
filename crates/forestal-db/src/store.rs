//! # Product Store
//!
//! The read-side seam between the catalog engine and whatever holds the rows.
//!
//! ```text
//! Catalog<S: ProductStore>
//!     │
//!     ├── count(predicate)                  → matching row count
//!     ├── select(predicate, sort, window)   → one page of rows
//!     ├── get_by_id(id)                     → single row
//!     └── list_all()                        → every row, id ASC
//! ```
//!
//! [`ProductRepository`](crate::ProductRepository) is the SQLite
//! implementation. Tests substitute an in-memory one.

use async_trait::async_trait;

use forestal_core::{PageWindow, Predicate, Product, SortClause};

use crate::error::DbResult;

/// Read access to the product table.
///
/// Every call acquires its own connection scope and releases it before
/// returning, on success and on error.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Number of rows matching `predicate`.
    async fn count(&self, predicate: &Predicate) -> DbResult<u64>;

    /// Rows matching `predicate`, ordered by `sort`, restricted to `window`.
    async fn select(
        &self,
        predicate: &Predicate,
        sort: SortClause,
        window: &PageWindow,
    ) -> DbResult<Vec<Product>>;

    async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>>;

    /// Every row ordered by ascending id.
    async fn list_all(&self) -> DbResult<Vec<Product>>;
}
