//! # forestal-core: Pure Query Logic for the Forestal Catalog
//!
//! This crate holds the catalog query engine's logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Forestal Catalog Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront (browser)                         │   │
//! │  │      Filter panel ──► Product grid ──► Pager                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP /api/products/filter              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    catalog-api (axum)                           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ forestal-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │ criteria  │─►│ predicate │  │ pagination │  │   sort    │  │   │
//! │  │   │ normalize │  │  builder  │  │   plan()   │  │  clause   │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             forestal-db (store + result assembler)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`criteria`] - Raw query input and the Criteria Normalizer
//! - [`predicate`] - Predicate Builder (column, operator, bound value)
//! - [`pagination`] - Page count, clamping and row window
//! - [`sort`] - `ORDER BY` selection
//! - [`types`] - Domain types (Product, PageResult, SortOrder)
//! - [`money`] - Integer-cent prices with exact decimal parsing
//! - [`error`] - Domain error types
//! - [`validation`] - Field validators
//!
//! ## Example Usage
//!
//! ```rust
//! use forestal_core::criteria::{FilterCriteria, RawCriteria};
//! use forestal_core::pagination::{plan, PagePlan};
//! use forestal_core::predicate::Predicate;
//!
//! let raw = RawCriteria {
//!     product_type: Some("conifer".into()),
//!     page: Some("99".into()),
//!     page_size: Some("5".into()),
//!     ..RawCriteria::default()
//! };
//! let criteria = FilterCriteria::normalize(&raw).unwrap();
//! let predicate = Predicate::from_criteria(&criteria);
//! assert_eq!(predicate.conditions().len(), 1);
//!
//! // 9 matching rows: page 99 clamps to the last page
//! match plan(9, &criteria.page) {
//!     PagePlan::Window(window) => assert_eq!((window.page, window.offset), (2, 5)),
//!     PagePlan::Empty { .. } => unreachable!(),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod criteria;
pub mod error;
pub mod money;
pub mod pagination;
pub mod predicate;
pub mod sort;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use criteria::{FilterCriteria, RawCriteria};
pub use error::ValidationError;
pub use money::Money;
pub use pagination::{PagePlan, PageRequest, PageWindow};
pub use predicate::Predicate;
pub use sort::SortClause;
pub use types::*;
