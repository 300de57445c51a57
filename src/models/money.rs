//! Money type for representing rupiah amounts
//!
//! Internally stores amounts in sen (i64, hundredths of a rupiah) to avoid
//! floating-point precision issues. Provides safe arithmetic operations and
//! the `50,000.00` display format used throughout the application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as sen (hundredths of a rupiah)
///
/// Using i64 sen avoids floating-point precision issues while keeping
/// two-decimal display formatting exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from sen
    pub const fn from_sen(sen: i64) -> Self {
        Self(sen)
    }

    /// Create a Money amount from whole rupiah
    ///
    /// # Examples
    /// ```
    /// use prepaid_ledger::models::Money;
    /// let amount = Money::from_rupiah(50_000); // 50,000.00
    /// ```
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Self(rupiah * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in sen
    pub const fn sen(&self) -> i64 {
        self.0
    }

    /// Get the whole rupiah portion (truncated toward zero)
    pub const fn rupiah(&self) -> i64 {
        self.0 / 100
    }

    /// Get the sen portion (0-99)
    pub const fn sen_part(&self) -> i64 {
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

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "50000", "50,000", "50000.50", "-1000.25"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Thousands separators are display sugar; ignore them on input
        let s = s.replace(',', "");
        // The sign is only valid in leading position
        if s.is_empty() || s.contains('-') {
            return Err(MoneyParseError::InvalidFormat(s));
        }

        let sen = if let Some((whole, frac)) = s.split_once('.') {
            // Decimal format: "50000.50"; the fraction must be plain digits
            if !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.clone()));
            }

            let rupiah: i64 = whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?;

            // Pad or truncate the fraction to 2 digits
            let sen: i64 = match frac.len() {
                0 => 0,
                1 => {
                    frac.parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?
                        * 10
                }
                _ => frac[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?,
            };

            rupiah * 100 + sen
        } else {
            // Integer format - whole rupiah
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?
                * 100
        };

        Ok(Self(if negative { -sen } else { sen }))
    }

    /// Format with the IDR currency label, e.g. "50,000.00 IDR"
    pub fn format_idr(&self) -> String {
        format!("{} IDR", self)
    }

    /// Group the whole-rupiah digits with thousands separators
    fn grouped_rupiah(&self) -> String {
        let digits = self.rupiah().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        grouped
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
            write!(f, "-{}.{:02}", self.grouped_rupiah(), self.sen_part())
        } else {
            write!(f, "{}.{:02}", self.grouped_rupiah(), self.sen_part())
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
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
