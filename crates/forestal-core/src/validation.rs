//! # Validation Module
//!
//! Input validation utilities for the catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (catalog-api)                                   │
//! │  ├── Type coercion (query strings, JSON bodies)                        │
//! │  └── Missing-field detection on write payloads                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE + criteria normalizer                            │
//! │  ├── Page / pageSize domain checks                                     │
//! │  └── Non-negative price and stock                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (price_cents >= 0), CHECK (stock >= 0)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::ProductDraft;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted free-text search term.
pub const MAX_SEARCH_TERM_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a free-text search term.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed term.
///
/// ## Example
/// ```rust
/// use forestal_core::validation::validate_search_term;
///
/// assert_eq!(validate_search_term("  pine ").unwrap(), "pine");
/// assert!(validate_search_term("").is_err());
/// ```
pub fn validate_search_term(term: &str) -> ValidationResult<&str> {
    let term = term.trim();

    if term.is_empty() {
        return Err(ValidationError::Required {
            field: "term".to_string(),
        });
    }

    if term.chars().count() > MAX_SEARCH_TERM_LEN {
        return Err(ValidationError::TooLong {
            field: "term".to_string(),
            max: MAX_SEARCH_TERM_LEN,
        });
    }

    Ok(term)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product id taken from a path segment.
pub fn validate_product_id(id: i64) -> ValidationResult<i64> {
    if id < 1 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    Ok(id)
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates every field of a write payload that carries a domain rule.
///
/// Text fields are opaque and accepted as-is.
pub fn validate_draft(draft: &ProductDraft) -> ValidationResult<()> {
    if draft.price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    validate_stock(draft.stock)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn draft(price_cents: i64, stock: i64) -> ProductDraft {
        ProductDraft {
            name: "Felling Axe".to_string(),
            product_type: "hand tool".to_string(),
            brand: "Gransfors".to_string(),
            description: "Forged head, hickory handle".to_string(),
            price: Money::from_cents(price_cents),
            stock,
            image: "img/axe.jpg".to_string(),
        }
    }

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term("spruce"), Ok("spruce"));
        assert_eq!(validate_search_term("  fir  "), Ok("fir"));

        assert!(validate_search_term("").is_err());
        assert!(validate_search_term("   ").is_err());
        assert!(validate_search_term(&"a".repeat(101)).is_err());
        assert!(validate_search_term(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id(1), Ok(1));
        assert!(validate_product_id(0).is_err());
        assert!(validate_product_id(-4).is_err());
    }

    #[test]
    fn test_validate_draft() {
        assert!(validate_draft(&draft(0, 0)).is_ok());
        assert!(validate_draft(&draft(1999, 40)).is_ok());

        let err = validate_draft(&draft(-1, 3)).unwrap_err();
        assert_eq!(err.field(), "price");

        let err = validate_draft(&draft(100, -1)).unwrap_err();
        assert_eq!(err.field(), "stock");
    }
}
