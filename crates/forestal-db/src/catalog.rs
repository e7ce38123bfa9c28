//! # Catalog Query Engine
//!
//! Runs one filtered, sorted, paginated catalog query end to end and
//! assembles the [`PageResult`].
//!
//! ## Query Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog::query(raw)                                 │
//! │                                                                         │
//! │  RawCriteria                                                           │
//! │       │  FilterCriteria::normalize   ── ValidationError (no store I/O) │
//! │       ▼                                                                 │
//! │  Predicate::from_criteria                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.count(predicate)              ── StoreUnavailable               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  pagination::plan(count, page)                                         │
//! │       ├── Empty  ──► PageResult::empty(requested_page)   (no select)   │
//! │       └── Window ──► store.select(predicate, sort, window)             │
//! │                           │          ── StoreUnavailable               │
//! │                           ▼                                             │
//! │                      PageResult { items, totalCount, currentPage,      │
//! │                                   totalPages }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failure in either store call fails the whole query. No partial page is
//! ever returned.

use std::time::Instant;

use tracing::{debug, info};

use forestal_core::pagination::{self, PagePlan};
use forestal_core::validation::validate_product_id;
use forestal_core::{FilterCriteria, PageResult, Predicate, Product, RawCriteria, SortClause};

use crate::error::{CatalogError, CatalogResult};
use crate::store::ProductStore;

/// The catalog query engine over an injected [`ProductStore`].
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    store: S,
}

impl<S: ProductStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Catalog { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Normalizes raw query parameters and runs the query.
    pub async fn query(&self, raw: &RawCriteria) -> CatalogResult<PageResult<Product>> {
        let criteria = FilterCriteria::normalize(raw)?;
        self.query_criteria(&criteria).await
    }

    /// Runs a query for already-normalized criteria.
    pub async fn query_criteria(
        &self,
        criteria: &FilterCriteria,
    ) -> CatalogResult<PageResult<Product>> {
        let start = Instant::now();
        let predicate = Predicate::from_criteria(criteria);

        let total_count = self.store.count(&predicate).await?;

        let result = match pagination::plan(total_count, &criteria.page) {
            PagePlan::Empty { requested_page } => {
                debug!(requested_page, "No matching products, skipping page query");
                PageResult::empty(requested_page)
            }
            PagePlan::Window(window) => {
                let sort = SortClause::for_order(criteria.sort_order);
                let items = self.store.select(&predicate, sort, &window).await?;
                PageResult {
                    items,
                    total_count,
                    current_page: window.page,
                    total_pages: window.total_pages,
                }
            }
        };

        info!(
            total_count = result.total_count,
            current_page = result.current_page,
            total_pages = result.total_pages,
            returned = result.items.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Catalog query complete"
        );

        Ok(result)
    }

    /// Looks up one product by id, bypassing predicates and paging.
    pub async fn get(&self, id: i64) -> CatalogResult<Product> {
        let id = validate_product_id(id)?;
        self.store
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Every product ordered by id. Never paginated.
    pub async fn list_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.store.list_all().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
