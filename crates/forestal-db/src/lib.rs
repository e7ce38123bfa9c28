//! # forestal-db: Database Layer for the Forestal Catalog
//!
//! SQLite storage via sqlx plus the catalog query engine that drives it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Forestal Catalog Data Flow                         │
//! │                                                                         │
//! │  GET /api/products/filter                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   forestal-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Catalog    │    │  Repository   │    │  Database    │  │   │
//! │  │   │ (catalog.rs)  │───►│ (product.rs)  │───►│  (pool.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ normalize     │    │ ProductStore  │    │ SqlitePool   │  │   │
//! │  │   │ count → plan  │    │ QueryBuilder  │    │ migrations   │  │   │
//! │  │   │ → select      │    │ CRUD, search  │    │ timeouts     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./data/forestal.db                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and catalog error types
//! - [`store`] - The `ProductStore` trait
//! - [`repository`] - SQLite repository implementations
//! - [`catalog`] - The catalog query engine
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forestal_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./data/forestal.db")).await?;
//!
//! let page = db.catalog().query(&raw_criteria).await?;
//! let hits = db.products().search("spruce").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult, DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
pub use store::ProductStore;
