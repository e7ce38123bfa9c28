//! Sort clause selection for the catalog data query.

use std::cmp::Ordering;

use crate::types::{Product, SortOrder};

/// Direction of an `ORDER BY` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Column a page can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Price,
}

impl SortColumn {
    pub const fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Price => "price_cents",
        }
    }
}

/// The `ORDER BY` of the data query.
///
/// Price orderings break ties on ascending id, so equal prices never swap
/// places between two page fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortClause {
    pub column: SortColumn,
    pub direction: Direction,
}

impl SortClause {
    pub fn for_order(order: SortOrder) -> Self {
        match order {
            SortOrder::Unspecified => SortClause {
                column: SortColumn::Id,
                direction: Direction::Asc,
            },
            SortOrder::Ascending => SortClause {
                column: SortColumn::Price,
                direction: Direction::Asc,
            },
            SortOrder::Descending => SortClause {
                column: SortColumn::Price,
                direction: Direction::Desc,
            },
        }
    }

    /// Renders the clause body, e.g. `price_cents DESC, id ASC`.
    pub fn to_sql(&self) -> String {
        match self.column {
            SortColumn::Id => format!("id {}", self.direction.as_sql()),
            column => format!("{} {}, id ASC", column.as_sql(), self.direction.as_sql()),
        }
    }

    /// Orders two products the way the rendered clause would.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let primary = match self.column {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Price => a.price.cmp(&b.price),
        };
        let primary = match self.direction {
            Direction::Asc => primary,
            Direction::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}
