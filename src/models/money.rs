//! Money type for representing appraisal amounts
//!
//! Appraisals are quoted in whole currency units (no cents), matching how
//! trade-in offers are made. Amounts are stored as a signed i64 so that a
//! vehicle whose mileage penalty exceeds its residual can go below zero.
//! Arithmetic saturates at the i64 bounds instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A monetary amount in whole currency units (e.g. whole dollars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use appraise::models::Money;
    /// let offer = Money::from_units(29_600);
    /// assert_eq!(offer.to_string(), "$29,600");
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value, saturating at the maximum amount
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "29600", "$29,600", "-500", "-$500"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, rest) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let units: i64 = digits
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -units } else { units }))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let grouped = group_thousands(self.0.unsigned_abs());
        if self.is_negative() {
            format!("-{}{}", symbol, grouped)
        } else {
            format!("{}{}", symbol, grouped)
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
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
