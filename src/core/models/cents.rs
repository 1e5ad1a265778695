//! Fixed-point currency amounts
//!
//! Receipts carry money as text (`"12.34"`). Amounts are parsed straight into
//! whole cents so no rule ever sees a binary floating-point value.
//!
//! # Examples
//!
//! ```
//! use receipt_points::core::models::Cents;
//!
//! let total: Cents = "35.35".parse().unwrap();
//! assert_eq!(total.get(), 3535);
//! assert!(!total.is_round_dollar());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a currency amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CentsParseError {
    /// Amount was not `<digits>.<two digits>`
    #[error("expected <digits>.<two digits>, got '{0}'")]
    Format(String),

    /// Amount does not fit in 64 bits of cents
    #[error("amount '{0}' is too large")]
    Overflow(String),
}

/// A non-negative currency amount in whole cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(u64);

impl Cents {
    /// Wrap a raw cent count
    #[must_use]
    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Raw cent count
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// True when there is no fractional part (`.00`)
    #[must_use]
    pub const fn is_round_dollar(self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount is a multiple of `0.25`
    #[must_use]
    pub const fn is_multiple_of_quarter(self) -> bool {
        self.0 % 25 == 0
    }

    /// One fifth of the amount in dollars, rounded up to a whole number
    ///
    /// `price × 0.2` in dollars is `cents / 500`; the ceiling is taken with
    /// integer arithmetic so `12.25` gives exactly 3 and `10.00` exactly 2.
    #[must_use]
    pub const fn fifth_dollars_ceil(self) -> u64 {
        self.0.div_ceil(500)
    }
}

impl FromStr for Cents {
    type Err = CentsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || CentsParseError::Format(s.to_string());

        let (dollars, fraction) = s.split_once('.').ok_or_else(format_err)?;
        if dollars.is_empty()
            || fraction.len() != 2
            || !dollars.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(format_err());
        }

        let overflow = || CentsParseError::Overflow(s.to_string());
        let dollars: u64 = dollars.parse().map_err(|_| overflow())?;
        let fraction: u64 = fraction.parse().map_err(|_| format_err())?;

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Self)
            .ok_or_else(overflow)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
