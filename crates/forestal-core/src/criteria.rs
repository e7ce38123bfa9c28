//! # Criteria Normalizer
//!
//! Turns loosely-typed query-string pairs into a typed [`FilterCriteria`].
//!
//! ## Leniency Policy
//! ```text
//! ┌────────────────────┬──────────────────────┬─────────────────────────────┐
//! │ Parameter          │ Unparseable          │ Parseable, out of domain    │
//! ├────────────────────┼──────────────────────┼─────────────────────────────┤
//! │ priceMin/priceMax  │ absent (no bound)    │ passed through, saturating  │
//! │ page               │ absent (default 1)   │ < 1 → ValidationError       │
//! │ pageSize           │ absent (default 10)  │ < 1 → ValidationError       │
//! │ sortOrder          │ not asc/desc/"" → ValidationError                  │
//! │ type/brand         │ "" → absent, otherwise passed through unmodified   │
//! └────────────────────┴──────────────────────┴─────────────────────────────┘
//! ```
//!
//! The price bounds fail open while paging fails closed. Both directions are
//! pinned by the tests below.
//!
//! An integer token too large for `u64` still counts as parseable: a huge
//! page saturates and is later clamped, a huge negative page is rejected.

use serde::Deserialize;

use crate::error::ValidationError;
use crate::money::{Money, Rounding};
use crate::pagination::{PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::types::SortOrder;
use crate::validation::ValidationResult;

// =============================================================================
// Raw Input
// =============================================================================

/// Untrusted filter input exactly as it arrived in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCriteria {
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub brand: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl RawCriteria {
    /// Collects criteria from decoded query pairs.
    ///
    /// The first occurrence of a repeated key wins. Unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = RawCriteria::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "type" => &mut raw.product_type,
                "brand" => &mut raw.brand,
                "priceMin" => &mut raw.price_min,
                "priceMax" => &mut raw.price_max,
                "sortOrder" => &mut raw.sort_order,
                "page" => &mut raw.page,
                "pageSize" => &mut raw.page_size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        raw
    }
}

// =============================================================================
// Normalized Criteria
// =============================================================================

/// Typed, bounded filter criteria for one catalog query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact match on `type`.
    pub product_type: Option<String>,
    /// Exact match on `brand`.
    pub brand: Option<String>,
    /// Inclusive lower price bound.
    pub price_min: Option<Money>,
    /// Inclusive upper price bound. May sit below `price_min`, which simply
    /// matches nothing.
    pub price_max: Option<Money>,
    pub sort_order: SortOrder,
    pub page: PageRequest,
}

impl FilterCriteria {
    /// Normalizes raw input. Never touches the store.
    pub fn normalize(raw: &RawCriteria) -> ValidationResult<Self> {
        let sort_order = SortOrder::from_token(raw.sort_order.as_deref()).ok_or_else(|| {
            ValidationError::NotAllowed {
                field: "sortOrder".to_string(),
                allowed: SortOrder::ALLOWED.iter().map(|s| s.to_string()).collect(),
            }
        })?;

        let page = parse_page_number("page", raw.page.as_deref(), DEFAULT_PAGE)?;
        let page_size = parse_page_number("pageSize", raw.page_size.as_deref(), DEFAULT_PAGE_SIZE)?;

        Ok(FilterCriteria {
            product_type: non_empty(raw.product_type.as_deref()),
            brand: non_empty(raw.brand.as_deref()),
            price_min: raw
                .price_min
                .as_deref()
                .and_then(|s| Money::parse_bound(s, Rounding::Up)),
            price_max: raw
                .price_max
                .as_deref()
                .and_then(|s| Money::parse_bound(s, Rounding::Down)),
            sort_order,
            page: PageRequest::new(page, page_size)?,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Unparseable → default; parseable and below 1 → error.
///
/// Any optionally signed run of ASCII digits is parseable. Positive values
/// beyond `u64::MAX` saturate.
fn parse_page_number(field: &str, raw: Option<&str>, default: u64) -> ValidationResult<u64> {
    let Some(token) = raw.map(str::trim) else {
        return Ok(default);
    };
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(default);
    }

    // Only overflow can fail here
    let magnitude = digits.parse::<u64>().unwrap_or(u64::MAX);
    if negative || magnitude == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(magnitude)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawCriteria {
        RawCriteria::default()
    }

    #[test]
    fn test_defaults() {
        let criteria = FilterCriteria::normalize(&raw()).unwrap();
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(criteria.page.page(), 1);
        assert_eq!(criteria.page.page_size(), 10);
    }

    #[test]
    fn test_full_input() {
        let input = RawCriteria {
            product_type: Some("conifer".into()),
            brand: Some("Nordic Nursery".into()),
            price_min: Some("10".into()),
            price_max: Some("80.5".into()),
            sort_order: Some("asc".into()),
            page: Some("2".into()),
            page_size: Some("5".into()),
        };
        let criteria = FilterCriteria::normalize(&input).unwrap();

        assert_eq!(criteria.product_type.as_deref(), Some("conifer"));
        assert_eq!(criteria.brand.as_deref(), Some("Nordic Nursery"));
        assert_eq!(criteria.price_min, Some(Money::from_cents(1000)));
        assert_eq!(criteria.price_max, Some(Money::from_cents(8050)));
        assert_eq!(criteria.sort_order, SortOrder::Ascending);
        assert_eq!(criteria.page, PageRequest::new(2, 5).unwrap());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let input = RawCriteria {
            product_type: Some(String::new()),
            brand: Some(String::new()),
            sort_order: Some(String::new()),
            ..raw()
        };
        let criteria = FilterCriteria::normalize(&input).unwrap();
        assert_eq!(criteria.product_type, None);
        assert_eq!(criteria.brand, None);
        assert_eq!(criteria.sort_order, SortOrder::Unspecified);
    }

    #[test]
    fn test_string_filters_are_not_trimmed() {
        let input = RawCriteria {
            brand: Some(" Husqvarna ".into()),
            ..raw()
        };
        let criteria = FilterCriteria::normalize(&input).unwrap();
        assert_eq!(criteria.brand.as_deref(), Some(" Husqvarna "));
    }

    #[test]
    fn test_unparseable_price_bounds_fail_open() {
        let input = RawCriteria {
            price_min: Some("cheap".into()),
            price_max: Some("NaN".into()),
            ..raw()
        };
        let criteria = FilterCriteria::normalize(&input).unwrap();
        assert_eq!(criteria.price_min, None);
        assert_eq!(criteria.price_max, None);
    }

    #[test]
    fn test_inverted_price_bounds_are_accepted() {
        let input = RawCriteria {
            price_min: Some("80".into()),
            price_max: Some("10".into()),
            ..raw()
        };
        let criteria = FilterCriteria::normalize(&input).unwrap();
        assert!(criteria.price_min > criteria.price_max);
    }

    #[test]
    fn test_unparseable_paging_falls_back_to_defaults() {
        let input = RawCriteria {
            page: Some("two".into()),
            page_size: Some("2.5".into()),
            ..raw()
        };
        let criteria = FilterCriteria::normalize(&input).unwrap();
        assert_eq!(criteria.page, PageRequest::default());
    }

    #[test]
    fn test_out_of_domain_paging_fails_closed() {
        for (page, page_size, field) in [
            ("0", "10", "page"),
            ("-1", "10", "page"),
            ("1", "0", "pageSize"),
            ("1", "-3", "pageSize"),
        ] {
            let input = RawCriteria {
                page: Some(page.into()),
                page_size: Some(page_size.into()),
                ..raw()
            };
            let err = FilterCriteria::normalize(&input).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MustBePositive {
                    field: field.to_string()
                }
            );
        }
    }

    #[test]
    fn test_unknown_sort_token_lists_allowed_values() {
        let input = RawCriteria {
            sort_order: Some("random".into()),
            ..raw()
        };
        let err = FilterCriteria::normalize(&input).unwrap_err();
        assert_eq!(err.field(), "sortOrder");
        assert_eq!(err.to_string(), "sortOrder must be one of: asc, desc");
    }

    #[test]
    fn test_sort_is_checked_before_paging() {
        let input = RawCriteria {
            sort_order: Some("up".into()),
            page: Some("0".into()),
            ..raw()
        };
        let err = FilterCriteria::normalize(&input).unwrap_err();
        assert_eq!(err.field(), "sortOrder");
    }

    #[test]
    fn test_oversized_negative_page_fails_closed() {
        for page in ["-99999999999999999999", "-0", "00"] {
            let input = RawCriteria {
                page: Some(page.into()),
                ..raw()
            };
            let err = FilterCriteria::normalize(&input).unwrap_err();
            assert_eq!(err.field(), "page", "{page}");
        }
    }

    #[test]
    fn test_oversized_page_saturates() {
        let input = RawCriteria {
            page: Some("99999999999999999999".into()),
            page_size: Some(" +5 ".into()),
            ..raw()
        };
        let criteria = FilterCriteria::normalize(&input).unwrap();
        assert_eq!(criteria.page.page(), u64::MAX);
        assert_eq!(criteria.page.page_size(), 5);

        // Clamped to the last page once the count is known
        match crate::pagination::plan(9, &criteria.page) {
            crate::pagination::PagePlan::Window(window) => {
                assert_eq!((window.page, window.offset), (2, 5))
            }
            other => panic!("expected a window, got {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_tokens_are_unparseable() {
        for token in ["", "-", "+", "1.0", "1e3", "--2", "0x10"] {
            let input = RawCriteria {
                page: Some(token.into()),
                ..raw()
            };
            let criteria = FilterCriteria::normalize(&input).unwrap();
            assert_eq!(criteria.page.page(), 1, "{token:?}");
        }
    }

    #[test]
    fn test_oversized_price_bounds_are_kept() {
        let input = RawCriteria {
            price_min: Some("100000000000000000000".into()),
            price_max: Some("-1e20".into()),
            ..raw()
        };
        let criteria = FilterCriteria::normalize(&input).unwrap();
        assert_eq!(criteria.price_min, Some(Money::MAX));
        assert_eq!(criteria.price_max, Some(Money::MIN));
    }

    #[test]
    fn test_repeated_keys_keep_the_first_value() {
        let raw = RawCriteria::from_pairs([
            ("type", "conifer"),
            ("type", "hand tool"),
            ("utm_source", "newsletter"),
            ("pageSize", "5"),
        ]);
        assert_eq!(raw.product_type.as_deref(), Some("conifer"));
        assert_eq!(raw.page_size.as_deref(), Some("5"));
        assert_eq!(raw.brand, None);
    }
}
