//! Amount type for transaction values
//!
//! Amounts are always finite and non-negative; whether money came in or went
//! out is carried by the transaction kind, never by the sign.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative monetary amount in a single currency unit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, storing the absolute value
    ///
    /// Non-finite inputs become zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.abs())
        } else {
            Self(0.0)
        }
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// The underlying value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse amount text typed on the entry form
    ///
    /// Returns `None` when the text has no numeric prefix or the value is zero,
    /// which the form rejects.
    pub fn from_input(text: &str) -> Option<Self> {
        parse_lenient(text)
            .filter(|value| *value != 0.0)
            .map(Self::new)
    }

    /// Parse an amount column from an imported file, degrading to zero
    ///
    /// The flag is `true` when the column could not be parsed.
    pub fn from_column(text: &str) -> (Self, bool) {
        match parse_lenient(text) {
            Some(value) => (Self::new(value), false),
            None => (Self::zero(), true),
        }
    }
}

/// Parse the longest numeric prefix of `text`
///
/// Leading whitespace is skipped and trailing garbage ignored, so `" 12.5kg"`
/// parses as `12.5`. Accepts an optional sign, digits with an optional
/// fraction, and an optional exponent.
pub fn parse_lenient(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let mut probe = end + 1;
        while probe < bytes.len() && bytes[probe].is_ascii_digit() {
            probe += 1;
        }
        frac_digits = probe - end - 1;
        if int_digits + frac_digits > 0 {
            end = probe;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut probe = end + 1;
        if probe < bytes.len() && matches!(bytes[probe], b'+' | b'-') {
            probe += 1;
        }
        let exp_start = probe;
        while probe < bytes.len() && bytes[probe].is_ascii_digit() {
            probe += 1;
        }
        if probe > exp_start {
            end = probe;
        }
    }

    s[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, amount| acc + amount)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
