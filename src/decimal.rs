//! Exact decimal representation of input values
//!
//! Values are held as decimal digit strings so that rounding works on the
//! digits a reader sees (`1234568.12345`) rather than on the nearest binary
//! float.

use std::fmt;
use std::str::FromStr;

use crate::error::{LocalizationError, Result};
use crate::parser::parse_decimal_literal;
use crate::types::RoundingMode;

/// A finite decimal number: sign, integer digits and fractional digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalNumber {
    negative: bool,
    integer: String,
    fraction: String,
}

impl DecimalNumber {
    /// Build from raw digit strings; leading integer zeros and trailing
    /// fractional zeros are dropped and a zero value is never negative.
    pub(crate) fn from_digits(negative: bool, integer: &str, fraction: &str) -> Self {
        let integer = integer.trim_start_matches('0');
        let fraction = fraction.trim_end_matches('0');
        let integer = if integer.is_empty() { "0" } else { integer };
        let is_zero = integer == "0" && fraction.is_empty();
        Self {
            negative: negative && !is_zero,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        }
    }

    /// Convert a float using its shortest round-trip decimal representation
    ///
    /// ```
    /// use locale_format::DecimalNumber;
    ///
    /// let value = DecimalNumber::from_f64(1234568.12345).unwrap();
    /// assert_eq!(value.to_string(), "1234568.12345");
    /// assert!(DecimalNumber::from_f64(f64::NAN).is_err());
    /// ```
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(LocalizationError::InvalidNumber {
                value: value.to_string(),
            });
        }
        // f64's Display never switches to exponent notation
        let repr = value.abs().to_string();
        let (integer, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
        Ok(Self::from_digits(value < 0.0, integer, fraction))
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.is_empty()
    }

    /// Integer digits without sign or leading zeros (`"0"` for values below one)
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Fractional digits without trailing zeros
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// Round to at most `digits` fractional digits
    pub fn round(&self, digits: usize, mode: RoundingMode) -> Self {
        if self.fraction.len() <= digits {
            return self.clone();
        }

        let (kept, dropped) = self.fraction.split_at(digits);
        let dropped = dropped.as_bytes();
        let last_kept = kept
            .bytes()
            .last()
            .or_else(|| self.integer.bytes().last())
            .unwrap_or(b'0');

        let round_up = match mode {
            RoundingMode::Down => false,
            RoundingMode::HalfUp => dropped[0] >= b'5',
            RoundingMode::HalfEven => match dropped[0].cmp(&b'5') {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => {
                    dropped[1..].iter().any(|d| *d != b'0') || (last_kept - b'0') % 2 == 1
                }
            },
        };

        let mut all: Vec<u8> = self.integer.bytes().chain(kept.bytes()).collect();
        if round_up {
            let mut carry = true;
            for digit in all.iter_mut().rev() {
                if *digit == b'9' {
                    *digit = b'0';
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                all.insert(0, b'1');
            }
        }

        let split = all.len() - digits;
        // Only ASCII digits are ever stored
        let integer = String::from_utf8_lossy(&all[..split]);
        let fraction = String::from_utf8_lossy(&all[split..]);
        Self::from_digits(self.negative, &integer, &fraction)
    }

    /// Lossy conversion back to a float
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

impl FromStr for DecimalNumber {
    type Err = LocalizationError;

    /// Parse a plain decimal literal such as `-1234568.12345`
    fn from_str(s: &str) -> Result<Self> {
        parse_decimal_literal(s)
    }
}

impl TryFrom<f64> for DecimalNumber {
    type Error = LocalizationError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

impl From<i64> for DecimalNumber {
    fn from(value: i64) -> Self {
        Self::from_digits(value < 0, &value.unsigned_abs().to_string(), "")
    }
}
