//! # Pagination Engine
//!
//! Page math for the catalog query: total page count, page clamping and the
//! `(offset, limit)` window of the data query.
//!
//! ## Planning Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       plan(total_count, request)                        │
//! │                                                                         │
//! │  total_count == 0 ──► PagePlan::Empty { requested_page }               │
//! │       │                (data query is skipped, page echoed as-is)      │
//! │       ▼                                                                 │
//! │  total_pages = ceil(total_count / page_size)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  page = clamp(requested_page, 1, total_pages)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  offset = (page - 1) * page_size, limit = page_size                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PagePlan::Window(PageWindow { page, total_pages, offset, limit })     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clamping an out-of-range page is silent so a UI holding a stale page
//! number after the catalog shrinks still gets the last page back.

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Page returned when the caller does not ask for one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

// =============================================================================
// Page Request
// =============================================================================

/// A requested page and page size, both guaranteed >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Creates a page request, rejecting zero for either value.
    pub fn new(page: u64, page_size: u64) -> ValidationResult<Self> {
        if page < 1 {
            return Err(ValidationError::MustBePositive {
                field: "page".to_string(),
            });
        }
        if page_size < 1 {
            return Err(ValidationError::MustBePositive {
                field: "pageSize".to_string(),
            });
        }
        Ok(PageRequest { page, page_size })
    }

    /// Requested 1-based page, possibly past the last page.
    #[inline]
    pub const fn page(&self) -> u64 {
        self.page
    }

    #[inline]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// =============================================================================
// Page Plan
// =============================================================================

/// Rows of the filtered, sorted set that make up one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective page after clamping.
    pub page: u64,
    pub total_pages: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Outcome of planning a page against a known total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePlan {
    /// Nothing matched. The requested page is echoed back unchanged.
    Empty { requested_page: u64 },
    /// Fetch this window.
    Window(PageWindow),
}

/// Number of pages needed for `total_count` rows.
///
/// A zero page size is treated as 1.
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size.max(1))
}

/// Plans the data query for a request once the total count is known.
pub fn plan(total_count: u64, request: &PageRequest) -> PagePlan {
    if total_count == 0 {
        return PagePlan::Empty {
            requested_page: request.page(),
        };
    }

    let page_size = request.page_size().max(1);
    let total_pages = total_pages(total_count, page_size);
    let page = request.page().clamp(1, total_pages);

    PagePlan::Window(PageWindow {
        page,
        total_pages,
        // page <= total_pages keeps this below total_count
        offset: (page - 1) * page_size,
        limit: page_size,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(page: u64, page_size: u64) -> PageRequest {
        PageRequest::new(page, page_size).unwrap()
    }

    #[test]
    fn test_page_request_rejects_zero() {
        assert_eq!(PageRequest::new(0, 10).unwrap_err().field(), "page");
        assert_eq!(PageRequest::new(1, 0).unwrap_err().field(), "pageSize");
        assert_eq!(PageRequest::default(), request(1, 10));
    }

    #[test]
    fn test_empty_echoes_requested_page() {
        assert_eq!(
            plan(0, &request(7, 3)),
            PagePlan::Empty { requested_page: 7 }
        );
    }

    #[test]
    fn test_second_page_window() {
        assert_eq!(
            plan(9, &request(2, 5)),
            PagePlan::Window(PageWindow {
                page: 2,
                total_pages: 2,
                offset: 5,
                limit: 5,
            })
        );
    }

    #[test]
    fn test_overflow_page_is_clamped() {
        assert_eq!(plan(9, &request(99, 5)), plan(9, &request(2, 5)));
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_huge_page_size_does_not_overflow() {
        let plan = plan(u64::MAX, &request(u64::MAX, u64::MAX));
        assert_eq!(
            plan,
            PagePlan::Window(PageWindow {
                page: 1,
                total_pages: 1,
                offset: 0,
                limit: u64::MAX,
            })
        );
    }

    proptest! {
        #[test]
        fn prop_windows_tile_the_result_set(total in 1u64..500, size in 1u64..50) {
            let pages = total_pages(total, size);
            prop_assert_eq!(pages, (total + size - 1) / size);

            let mut covered = 0u64;
            for page in 1..=pages {
                match plan(total, &request(page, size)) {
                    PagePlan::Window(w) => {
                        prop_assert_eq!(w.page, page);
                        prop_assert_eq!(w.offset, covered);
                        covered += w.limit.min(total - w.offset);
                    }
                    PagePlan::Empty { .. } => prop_assert!(false, "non-empty total planned as empty"),
                }
            }
            prop_assert_eq!(covered, total);
        }

        #[test]
        fn prop_clamping_is_idempotent(total in 1u64..500, size in 1u64..50, extra in 1u64..100) {
            let last = total_pages(total, size);
            prop_assert_eq!(plan(total, &request(last + extra, size)), plan(total, &request(last, size)));
        }
    }
}
