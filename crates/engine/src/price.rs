use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::EngineError;

/// Non-negative amount represented as **integer hundredths**.
///
/// Use this type for every price in the engine (dish prices, filter ceilings)
/// so comparisons and formatting never drift the way floating point does.
///
/// # Examples
///
/// ```rust
/// use engine::Price;
///
/// let price = Price::from_cents(12_50);
/// assert_eq!(price.cents(), 1250);
/// assert_eq!(price.to_string(), "12.50");
/// ```
///
/// Parsing from user input accepts `.` as decimal separator and an optional
/// exponent, then rounds to two decimals, half away from zero:
///
/// ```rust
/// use engine::Price;
///
/// assert_eq!("25".parse::<Price>().unwrap().to_string(), "25.00");
/// assert_eq!("12.5".parse::<Price>().unwrap().to_string(), "12.50");
/// assert_eq!("1e3".parse::<Price>().unwrap().to_string(), "1000.00");
/// assert_eq!("12.345".parse::<Price>().unwrap().to_string(), "12.35");
/// assert!("-5".parse::<Price>().is_err());
/// assert!("12,5".parse::<Price>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Creates a new price from integer hundredths.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in hundredths.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Returns `true` if the price is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 100;
        let cents = self.0 % 100;
        write!(f, "{units}.{cents:02}")
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Price> for u64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Price {
    type Err = EngineError;

    /// Parses a decimal string into hundredths.
    ///
    /// Accepts an optional leading `+`/`-`, digits with `.` as the only
    /// decimal separator and an optional `e`/`E` exponent (`2.5e1`). Either
    /// the integer or the fractional part may be omitted (`.5`, `5.`), not
    /// both.
    ///
    /// The value is rounded half away from zero using the digit right after
    /// the hundredths. Negative values are rejected; `-0` is zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || EngineError::InvalidPrice(format!("\"{trimmed}\" is not a number"));
        let overflow = || EngineError::InvalidPrice("price too large".to_string());

        if trimmed.is_empty() {
            return Err(EngineError::InvalidPrice("empty price".to_string()));
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                (mantissa, parse_exponent(exponent).ok_or_else(invalid)?)
            }
            None => (rest, 0),
        };

        let mut parts = mantissa.split('.');
        let units_str = parts.next().unwrap_or_default();
        let frac_str = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            return Err(invalid());
        }
        if units_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        if !units_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        // All significant digits, with the decimal point `point` digits in.
        let all_digits = format!("{units_str}{frac_str}");
        let digits = all_digits.trim_start_matches('0').as_bytes();
        let skipped = (all_digits.len() - digits.len()) as i64;
        let point = (units_str.len() as i64)
            .checked_sub(skipped)
            .and_then(|v| v.checked_add(exponent))
            .ok_or_else(overflow)?;

        let digit = |position: i64| -> u64 {
            usize::try_from(position)
                .ok()
                .and_then(|i| digits.get(i))
                .map_or(0, |b| u64::from(b - b'0'))
        };

        // `scale` digits make up the whole number of hundredths.
        let scale = point.checked_add(2).ok_or_else(overflow)?;
        let mut total: u64 = 0;
        if !digits.is_empty() {
            for position in 0..scale.max(0) {
                total = total
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit(position)))
                    .ok_or_else(overflow)?;
            }
            if digit(scale) >= 5 {
                total = total.checked_add(1).ok_or_else(overflow)?;
            }
        }

        if negative && total > 0 {
            return Err(EngineError::InvalidPrice(format!(
                "\"{trimmed}\" is negative"
            )));
        }

        Ok(Price(total))
    }
}

/// Signed decimal exponent; `None` when malformed or out of `i64` range.
fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
