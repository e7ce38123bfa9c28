//! # Predicate Builder
//!
//! Converts [`FilterCriteria`] into a conjunction of `(column, operator,
//! value)` conditions.
//!
//! ## Parameter Binding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  criteria { type: "conifer", priceMin: 10.00 }                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Predicate                                                              │
//! │  ├── Condition::Equals { Type, "conifer" }                             │
//! │  └── Condition::Price  { Gte, 10.00 }                                  │
//! │       │                                                                 │
//! │       ▼  (forestal-db renders)                                          │
//! │  WHERE "type" = ? AND price_cents >= ?      params: ["conifer", 1000]  │
//! │                                                                         │
//! │  Column and operator text come from fixed enums. Values only ever      │
//! │  travel as bound parameters.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same `Predicate` is handed to both the count and the data query.

use crate::criteria::FilterCriteria;
use crate::money::Money;
use crate::types::Product;

/// A text column of `products` matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColumn {
    Type,
    Brand,
}

impl TextColumn {
    /// SQL identifier. `type` is quoted.
    pub const fn as_sql(self) -> &'static str {
        match self {
            TextColumn::Type => "\"type\"",
            TextColumn::Brand => "brand",
        }
    }

    fn value_of(self, product: &Product) -> &str {
        match self {
            TextColumn::Type => &product.product_type,
            TextColumn::Brand => &product.brand,
        }
    }
}

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Gte,
    Lte,
}

impl Comparison {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Gte => ">=",
            Comparison::Lte => "<=",
        }
    }
}

/// A bound parameter value, borrowed from its condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Text(&'a str),
    Cents(i64),
}

/// One `column op ?` term of the predicate.
///
/// Each variant fixes which column kind goes with which value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `column = ?` on a text column.
    Equals { column: TextColumn, value: String },
    /// `price_cents op ?`.
    Price { op: Comparison, bound: Money },
}

impl Condition {
    pub fn column_sql(&self) -> &'static str {
        match self {
            Condition::Equals { column, .. } => column.as_sql(),
            Condition::Price { .. } => "price_cents",
        }
    }

    pub fn op(&self) -> Comparison {
        match self {
            Condition::Equals { .. } => Comparison::Eq,
            Condition::Price { op, .. } => *op,
        }
    }

    pub fn value(&self) -> Value<'_> {
        match self {
            Condition::Equals { value, .. } => Value::Text(value),
            Condition::Price { bound, .. } => Value::Cents(bound.cents()),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            Condition::Equals { column, value } => column.value_of(product) == value.as_str(),
            Condition::Price { op, bound } => match op {
                Comparison::Eq => product.price == *bound,
                Comparison::Gte => product.price >= *bound,
                Comparison::Lte => product.price <= *bound,
            },
        }
    }
}

/// Conjunction of conditions. No conditions means match every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    /// The universal predicate.
    pub fn match_all() -> Self {
        Predicate::default()
    }

    /// Builds the predicate for a set of criteria.
    ///
    /// Conditions are emitted in a fixed order: type, brand, priceMin,
    /// priceMax.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut predicate = Predicate::match_all();

        if let Some(product_type) = &criteria.product_type {
            predicate.conditions.push(Condition::Equals {
                column: TextColumn::Type,
                value: product_type.clone(),
            });
        }
        if let Some(brand) = &criteria.brand {
            predicate.conditions.push(Condition::Equals {
                column: TextColumn::Brand,
                value: brand.clone(),
            });
        }
        if let Some(min) = criteria.price_min {
            predicate.conditions.push(Condition::Price {
                op: Comparison::Gte,
                bound: min,
            });
        }
        if let Some(max) = criteria.price_max {
            predicate.conditions.push(Condition::Price {
                op: Comparison::Lte,
                bound: max,
            });
        }

        predicate
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_match_all(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Bound values in placeholder order.
    pub fn parameters(&self) -> impl Iterator<Item = Value<'_>> {
        self.conditions.iter().map(Condition::value)
    }

    /// Evaluates the predicate against an in-memory product.
    pub fn matches(&self, product: &Product) -> bool {
        self.conditions.iter().all(|condition| condition.matches(product))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
