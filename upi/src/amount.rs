//! A non-negative payment amount in rupees.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// An error that can occur when strictly parsing a string into an `Amount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The string is empty or only whitespace.
    #[error("amount is empty")]
    Empty,
    /// The string is not a number (e.g., "abc", "1.2.3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The number is below zero.
    #[error("amount must not be negative")]
    Negative,
    /// The number is NaN or infinite.
    #[error("amount must be a finite number")]
    NotFinite,
}

/// A payment amount.
///
/// The value is kept exactly as the user supplied it. No currency rounding is
/// applied: `Display` renders the shortest representation of the number, so
/// `500.00` becomes `500` and `12.50` becomes `12.5`. A zero amount means
/// "no amount" and is left out of links and of the on-screen summary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Self = Self(0.0);

    /// Creates an amount, coercing negative or non-finite values to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Parses form input, falling back to zero for anything that is not a
    /// usable number.
    ///
    /// # Examples
    /// ```
    /// use upi::Amount;
    /// assert_eq!(Amount::parse_lenient("500.00").to_string(), "500");
    /// assert!(Amount::parse_lenient("").is_zero());
    /// assert!(Amount::parse_lenient("abc").is_zero());
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        s.trim().parse::<f64>().map(Self::new).unwrap_or_default()
    }

    /// Parses an amount, rejecting anything that is not a finite,
    /// non-negative number.
    pub fn parse(s: &str) -> Result<Self, ParseAmountError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseAmountError::Empty);
        }
        let value = s
            .parse::<f64>()
            .map_err(|_| ParseAmountError::InvalidFormat)?;
        if !value.is_finite() {
            return Err(ParseAmountError::NotFinite);
        }
        if value < 0.0 {
            return Err(ParseAmountError::Negative);
        }
        Ok(Self::new(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Formats the amount for display with the rupee sign and two decimals
    /// (e.g., "₹500.00").
    pub fn to_rupees(&self) -> String {
        format!("₹{:.2}", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_keeps_supplied_value() {
        assert_eq!(Amount::parse_lenient("500.00").value(), 500.0);
        assert_eq!(Amount::parse_lenient(" 12.5 ").value(), 12.5);
        assert_eq!(Amount::parse_lenient("0.01").value(), 0.01);
    }

    #[test]
    fn lenient_parse_coerces_bad_input_to_zero() {
        for input in ["", "   ", "abc", "1.2.3", "-5", "NaN", "inf", "-inf"] {
            assert!(Amount::parse_lenient(input).is_zero(), "input {input:?}");
        }
    }

    #[test]
    fn strict_parse_reports_each_failure() {
        assert_eq!(Amount::parse(""), Err(ParseAmountError::Empty));
        assert_eq!(Amount::parse("x1"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(Amount::parse("-1"), Err(ParseAmountError::Negative));
        assert_eq!(Amount::parse("inf"), Err(ParseAmountError::NotFinite));
        assert_eq!(Amount::parse("0"), Ok(Amount::ZERO));
        assert_eq!(Amount::parse("99.9").map(|a| a.value()), Ok(99.9));
    }

    #[test]
    fn display_never_uses_exponent_notation() {
        assert_eq!(Amount::parse_lenient("1e21").to_string(), "1000000000000000000000");
        assert_eq!(Amount::parse_lenient("1e-7").to_string(), "0.0000001");
    }

    #[test]
    fn display_does_not_reformat() {
        assert_eq!(Amount::new(500.0).to_string(), "500");
        assert_eq!(Amount::new(12.5).to_string(), "12.5");
        assert_eq!(Amount::new(0.1).to_string(), "0.1");
        assert_eq!(Amount::new(1234.567).to_string(), "1234.567");
    }

    #[test]
    fn rupee_display_uses_two_decimals() {
        assert_eq!(Amount::new(500.0).to_rupees(), "₹500.00");
        assert_eq!(Amount::new(12.5).to_rupees(), "₹12.50");
    }
}
