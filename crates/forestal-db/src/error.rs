//! # Database Error Types
//!
//! Error types for database operations and for the catalog query engine.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error) / elapsed query timeout                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError ← Adds context and categorization                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError ← Validation | NotFound | StoreUnavailable               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in catalog-api) ← Serialized for HTTP clients               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use forestal_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - `UPDATE`/`DELETE` matched no row
    /// - An id lookup that must succeed returned nothing
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A CHECK / NOT NULL / UNIQUE constraint rejected the write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// The store did not answer within the configured query timeout.
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Whether the failure is about reaching the store at all, as opposed to
    /// a statement it rejected.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            DbError::ConnectionFailed(_) | DbError::PoolExhausted | DbError::Timeout(_)
        )
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → ConstraintViolation or QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            sqlx::Error::Database(db_err) => {
                // SQLite reports "CHECK constraint failed: ...",
                // "NOT NULL constraint failed: ...", "UNIQUE constraint failed: ..."
                let msg = db_err.message();
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation(msg.to_string())
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Catalog Error
// =============================================================================

/// Outcome kinds of the catalog engine, as seen by its callers.
///
/// | Variant            | Caller signal | Retried by engine |
/// |--------------------|---------------|-------------------|
/// | `Validation`       | 4xx           | never             |
/// | `NotFound`         | 404           | never             |
/// | `StoreUnavailable` | 5xx           | never             |
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or out-of-domain input. Raised before any store access.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A single-record lookup found no row.
    #[error("Product not found: {0}")]
    NotFound(i64),

    /// Any failure talking to the store.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] DbError),
}

impl From<DbError> for CatalogError {
    fn from(err: DbError) -> Self {
        CatalogError::StoreUnavailable(err)
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
