//! # Error Types
//!
//! Domain-specific error types for forestal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  forestal-core errors (this file)                                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  forestal-db errors (separate crate)                                   │
//! │  ├── DbError          - Database operation failures                    │
//! │  └── CatalogError     - Query engine outcome (validation/404/store)    │
//! │                                                                         │
//! │  catalog-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any store access. Every variant names the offending field so
/// the transport layer can report it back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Several required fields are missing from a payload.
    #[error("missing fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Integer value must be at least 1.
    #[error("{field} must be >= 1")]
    MustBePositive { field: String },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {}", allowed.join(", "))]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Name of the field that failed validation.
    ///
    /// For [`ValidationError::MissingFields`] this is the first missing field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::Negative { field }
            | ValidationError::NotAllowed { field, .. } => field,
            ValidationError::MissingFields { fields } => {
                fields.first().map(String::as_str).unwrap_or_default()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
