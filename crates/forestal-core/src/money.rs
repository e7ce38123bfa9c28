//! # Money Module
//!
//! Provides the `Money` type for catalog prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A price filter "priceMax=0.29" parsed as f64 and scaled:               │
//! │    0.29 * 100 = 28.999999999999996  → floor = 28  ❌ WRONG!             │
//! │                                                                         │
//! │  OUR SOLUTION: exact decimals in, integer cents stored                 │
//! │    "0.29" → Decimal 0.29 → 29 cents                                    │
//! │    Column price_cents compares integers only                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use forestal_core::money::{Money, Rounding};
//!
//! let price = Money::from_cents(1250);
//! assert_eq!(price.to_string(), "12.50");
//!
//! // Lower bounds round up, upper bounds round down
//! assert_eq!(Money::parse_bound("10.001", Rounding::Up).unwrap().cents(), 1001);
//! assert_eq!(Money::parse_bound("10.009", Rounding::Down).unwrap().cents(), 1000);
//!
//! // Bounds past the i64 range saturate instead of disappearing
//! assert_eq!(Money::parse_bound("1e40", Rounding::Up), Some(Money::MAX));
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Rounding
// =============================================================================

/// How a decimal amount with sub-cent precision maps onto whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Toward positive infinity. Used for lower price bounds.
    Up,
    /// Toward negative infinity. Used for upper price bounds.
    Down,
    /// Half away from zero. Used when coercing payload prices.
    Nearest,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::Up => RoundingStrategy::ToPositiveInfinity,
            Rounding::Down => RoundingStrategy::ToNegativeInfinity,
            Rounding::Nearest => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

// =============================================================================
// Money
// =============================================================================

/// A monetary value in cents.
///
/// Stored in the `price_cents` column. Serialized on the wire as a decimal
/// string with two fraction digits (`"12.50"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct Money(i64);

impl Money {
    pub const MAX: Money = Money(i64::MAX);
    pub const MIN: Money = Money(i64::MIN);

    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Converts a decimal amount (major units) to cents.
    ///
    /// Returns `None` when the amount does not fit in `i64` cents.
    pub fn from_decimal(amount: Decimal, rounding: Rounding) -> Option<Self> {
        amount
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, rounding.strategy())
            .to_i64()
            .map(Money)
    }

    /// Parses a price bound such as `"12.5"`, `" 80 "` or `"1e2"`.
    ///
    /// Returns `None` only for text that is not a finite number. Numbers
    /// outside the `i64` cents range saturate to [`Money::MIN`] or
    /// [`Money::MAX`].
    pub fn parse_bound(raw: &str, rounding: Rounding) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(amount) = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
            let saturated = if amount.is_sign_negative() {
                Money::MIN
            } else {
                Money::MAX
            };
            return Some(Money::from_decimal(amount, rounding).unwrap_or(saturated));
        }

        // Literals beyond Decimal's range or scale. `inf` and `NaN` carry no
        // digit and stay unparseable.
        if !raw.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        let scaled = raw.parse::<f64>().ok()? * 100.0;
        let cents = match rounding {
            Rounding::Up => scaled.ceil(),
            Rounding::Down => scaled.floor(),
            Rounding::Nearest => scaled.round(),
        };
        // Float to int casts saturate
        Some(Money(cents as i64))
    }

    /// Returns the value as a decimal in major units.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Accepts JSON numbers or decimal strings, rounding to the nearest cent.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::from_decimal(amount, Rounding::Nearest)
            .ok_or_else(|| serde::de::Error::custom("price is out of range"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_eq!(Money::parse_bound("10", Rounding::Up), Some(Money::from_cents(1000)));
        assert_eq!(Money::parse_bound(" 12.5 ", Rounding::Up), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse_bound("1e2", Rounding::Up), Some(Money::from_cents(10000)));
        assert_eq!(Money::parse_bound("-3", Rounding::Down), Some(Money::from_cents(-300)));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(Money::parse_bound("abc", Rounding::Up), None);
        assert_eq!(Money::parse_bound("", Rounding::Up), None);
        assert_eq!(Money::parse_bound("NaN", Rounding::Up), None);
        assert_eq!(Money::parse_bound("inf", Rounding::Down), None);
    }

    #[test]
    fn test_bound_rounding_is_exact() {
        // The f64 path would floor 0.29 to 28 cents
        assert_eq!(Money::parse_bound("0.29", Rounding::Down).map(|m| m.cents()), Some(29));
        assert_eq!(Money::parse_bound("10.001", Rounding::Up).map(|m| m.cents()), Some(1001));
        assert_eq!(Money::parse_bound("10.009", Rounding::Down).map(|m| m.cents()), Some(1000));
        assert_eq!(Money::parse_bound("-0.005", Rounding::Up).map(|m| m.cents()), Some(0));
    }

    #[test]
    fn test_serde_round_trip_shape() {
        let json = serde_json::to_string(&Money::from_cents(1250)).unwrap();
        assert_eq!(json, "\"12.50\"");

        let from_number: Money = serde_json::from_str("12.346").unwrap();
        assert_eq!(from_number.cents(), 1235);

        let from_string: Money = serde_json::from_str("\"7.1\"").unwrap();
        assert_eq!(from_string.cents(), 710);
    }

    #[test]
    fn test_bounds_outside_cents_range_saturate() {
        assert_eq!(
            Money::parse_bound("100000000000000000000", Rounding::Up),
            Some(Money::MAX)
        );
        assert_eq!(Money::parse_bound("-1e20", Rounding::Down), Some(Money::MIN));
        // Too large for Decimal as well
        assert_eq!(Money::parse_bound("1e40", Rounding::Up), Some(Money::MAX));
        assert_eq!(Money::parse_bound("-1e400", Rounding::Down), Some(Money::MIN));
    }

    #[test]
    fn test_payload_price_out_of_range_is_an_error() {
        let result: Result<Money, _> = serde_json::from_str("\"100000000000000000000\"");
        assert!(result.is_err());
    }
}
