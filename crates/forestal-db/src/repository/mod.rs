//! # Repository Module
//!
//! Database repository implementations for the catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                           │
//! │       │                                                                 │
//! │       │  db.products().search("pine")                                  │
//! │       │  db.catalog().query(&raw)                                      │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── ProductStore: count / select / get_by_id / list_all              │
//! │  ├── search(&self, term)                                               │
//! │  └── insert / update / delete                                          │
//! │       │                                                                 │
//! │       │  SQL with bound parameters                                     │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD, search
//!   and catalog queries

pub mod product;
