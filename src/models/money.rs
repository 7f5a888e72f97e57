//! Money type for representing rupee amounts
//!
//! Internally stores amounts in paise (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and ₹ display formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as paise (hundredths of a rupee)
///
/// Using i64 paise avoids floating-point precision issues and supports
/// amounts up to approximately ₹92 quadrillion (both positive and negative).
///
/// The `Display` impl is the canonical formatter: every i64 paise value
/// renders as `-?₹<rupees>.<paise>` with exactly two paise digits, the ₹
/// symbol exactly once, and no grouping separators. [`Money::parse`] is the
/// strict inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from paise
    ///
    /// # Examples
    /// ```
    /// use paisa_ledger::models::Money;
    /// let amount = Money::from_paise(1050); // ₹10.50
    /// ```
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Create a Money amount from rupees and paise
    ///
    /// # Examples
    /// ```
    /// use paisa_ledger::models::Money;
    /// let amount = Money::from_rupees_paise(10, 50); // ₹10.50
    /// ```
    pub const fn from_rupees_paise(rupees: i64, paise: i64) -> Self {
        Self(rupees * 100 + paise)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in paise
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Get the whole rupees portion (truncated toward zero)
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Get the paise portion (0-99)
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value, saturating at `i64::MAX`
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse a money amount from its display form
    ///
    /// Accepts exactly the grammar the `Display` impl produces:
    /// `-?₹<digits>.<two digits>`. Anything else (missing symbol, wrong
    /// fraction width, grouping separators, a magnitude outside i64) is
    /// rejected as [`MoneyParseError::InvalidFormat`] and never coerced to
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use paisa_ledger::models::Money;
    /// assert_eq!(Money::parse("₹10.50").unwrap().paise(), 1050);
    /// assert_eq!(Money::parse("-₹0.05").unwrap().paise(), -5);
    /// assert!(Money::parse("10.50").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let rest = rest.strip_prefix('₹').ok_or_else(invalid)?;

        let (whole, frac) = rest.split_once('.').ok_or_else(invalid)?;
        if whole.is_empty()
            || frac.len() != 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        // Assemble the signed paise digits and parse once, so the full i64
        // range round-trips (|i64::MIN| does not fit in a positive i64).
        let mut digits = String::with_capacity(whole.len() + 3);
        if negative {
            digits.push('-');
        }
        digits.push_str(whole);
        digits.push_str(frac);

        digits.parse::<i64>().map(Self).map_err(|_| invalid())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // unsigned_abs keeps this total over all of i64, including i64::MIN
        let magnitude = self.0.unsigned_abs();
        if self.is_negative() {
            write!(f, "-₹{}.{:02}", magnitude / 100, magnitude % 100)
        } else {
            write!(f, "₹{}.{:02}", magnitude / 100, magnitude % 100)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
