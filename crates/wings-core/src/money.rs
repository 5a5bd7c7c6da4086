//! # Money Module
//!
//! Provides the `Money` type for product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The inventory service speaks JSON numbers:  "price": 12.5             │
//! │  Floats drift:  0.1 + 0.2 = 0.30000000000000004                         │
//! │                                                                         │
//! │  OUR SOLUTION: convert once at the wire boundary                       │
//! │    12.5  ──► Money(1250)  ──► "M12.50"                                  │
//! │    null  ──► None         ──► "N/A"                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wings_core::money::{format_currency, Money};
//!
//! let price = Money::from_cents(1250);
//! assert_eq!(price.to_string(), "M12.50");
//!
//! assert_eq!(format_currency(12.5), "M12.50");
//! assert_eq!(format_currency(f64::NAN), "N/A");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Currency marker printed in front of every amount (Lesotho loti).
pub const CURRENCY_MARKER: &str = "M";

/// Shown wherever an amount is missing or not a finite number.
pub const NOT_AVAILABLE: &str = "N/A";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (lisente, 1/100 loti).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic never has to special-case negatives
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - Serialized as plain cents; the wire's decimal form lives in [`serde_major`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use wings_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount in major units, rounding to
    /// the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use wings_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_major(12.5).unwrap().cents(), 1250);
    /// assert_eq!(Money::try_from_major(0.005).unwrap().cents(), 1);
    /// assert!(Money::try_from_major(f64::INFINITY).is_err());
    /// assert!(Money::try_from_major(1e17).is_err());
    /// ```
    pub fn try_from_major(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NotFinite {
                field: "amount".to_string(),
            });
        }
        let cents = (amount * 100.0).round();
        // 2^63 is exact in f64; anything at or past it would saturate.
        if cents.abs() >= i64::MAX as f64 {
            return Err(ValidationError::OutOfRange {
                field: "amount".to_string(),
            });
        }
        Ok(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal in major units, for the wire.
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit (loti) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a decimal amount for display: `M` followed by two decimals.
///
/// Any finite amount is printed as given, whatever its size. Returns `"N/A"`
/// for NaN and infinities instead of failing.
///
/// ```rust
/// use wings_core::money::format_currency;
///
/// assert_eq!(format_currency(12.5), "M12.50");
/// assert_eq!(format_currency(-5.5), "M-5.50");
/// assert_eq!(format_currency(0.0), "M0.00");
/// assert_eq!(format_currency(f64::NEG_INFINITY), "N/A");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    // -0.0 prints as "-0.00" otherwise.
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{CURRENCY_MARKER}{amount:.2}")
}

/// Formats an optional price the same way; `None` is `"N/A"`.
pub fn format_price(price: Option<Money>) -> String {
    price.map_or_else(|| NOT_AVAILABLE.to_string(), |money| money.to_string())
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            CURRENCY_MARKER,
            sign,
            self.major().abs(),
            self.minor_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Serde adapter for `Option<Money>` fields carried as decimal JSON numbers.
///
/// Decoding is lenient the way the service's clients have always been:
/// numbers and numeric strings are accepted, `null` or a missing field is
/// `None`. Anything else is `None` too, so one odd record never fails a whole
/// product list.
pub mod serde_major {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    use super::Money;

    pub fn serialize<S>(value: &Option<Money>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(money) => serializer.serialize_f64(money.to_major()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        let amount = match raw {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(amount.and_then(|a| Money::try_from_major(a).ok()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
