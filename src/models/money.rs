//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is a plain decimal number (`-40.5`), which keeps
//! snapshot files readable and compatible with hand-edited data.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Relative slack allowed when reading a binary decimal as whole cents
const SUB_CENT_TOLERANCE: f64 = 1e-9;

/// Represents a signed monetary amount stored as cents
///
/// Positive amounts are income, negative amounts are expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use assistant::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a Money amount from a decimal value
    ///
    /// Returns `None` for non-finite or out-of-range values, and for values
    /// with a non-zero digit beyond the second decimal place (`0.125`), so a
    /// stored amount is never silently rounded.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let scaled = value * 100.0;
        let cents = scaled.round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        if (scaled - cents).abs() > SUB_CENT_TOLERANCE * cents.abs().max(1.0) {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a decimal value
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive (income)
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative (expense)
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value, or `None` if it does not fit
    pub const fn checked_abs(&self) -> Option<Self> {
        match self.0.checked_abs() {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Addition, or `None` on overflow
    pub const fn checked_add(&self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Total of `amounts`, or `None` if it overflows
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+10.50", "10", "10.5", "-.5".
    /// Digits beyond the second fractional place must be zeros; "10.999" is
    /// rejected rather than rounded or truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        if fraction.len() > 2 && fraction[2..].chars().any(|c| c != '0') {
            return Err(invalid());
        }

        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "amount {} is out of range or has more than two decimal places",
                    value
                ))
            })
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
