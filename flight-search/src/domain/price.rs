//! Monetary amounts.
//!
//! Fares arrive as decimal strings ("24.5", "120"). They are held as whole
//! hundredths so that summing the legs of a trip is exact and comparisons
//! against a price cap never suffer from floating point drift.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price {input:?}: {reason}")]
pub struct InvalidPrice {
    input: String,
    reason: &'static str,
}

/// A non-negative price in hundredths of the currency unit.
///
/// # Examples
///
/// ```
/// use flight_search::domain::Price;
///
/// let fare = Price::parse("24.5").unwrap();
/// let bag = Price::parse("9").unwrap();
/// assert_eq!((fare + bag * 2).to_string(), "42.50");
///
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("1.234").is_err());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// The zero price.
    pub const ZERO: Price = Price(0);

    /// Create a price from a number of hundredths (cents).
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create a price from a whole number of currency units, saturating.
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Returns the price in hundredths.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Parse a decimal price string.
    ///
    /// Accepts an integer part and an optional fraction of at most two
    /// digits. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidPrice> {
        let invalid = |reason| InvalidPrice {
            input: s.to_string(),
            reason,
        };
        let trimmed = s.trim();

        if trimmed.starts_with('-') {
            return Err(invalid("must not be negative"));
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("expected a number"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("expected digits"));
        }
        if fraction.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let units: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("too large"))?
        };
        let mut cents: u64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| invalid("expected digits"))?
        };
        if fraction.len() == 1 {
            cents *= 10;
        }

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price)
            .ok_or_else(|| invalid("too large"))
    }

    /// Returns the price as a floating point amount, for display only.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// Arithmetic saturates at the largest representable price, so a total that
// would overflow still compares above any cap.
impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, rhs: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(rhs)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl std::str::FromStr for Price {
    type Err = InvalidPrice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({self})")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
