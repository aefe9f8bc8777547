//! Money type for representing monetary values.
//!
//! Uses a centimes-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The backend serializes
//! prices as decimal strings (`"2500.00"`), which [`Money::parse`] reads
//! without going through `f64`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Symbol of the shop currency (Algerian dinar).
pub const CURRENCY_SYMBOL: &str = "DA";

/// A monetary value in the shop currency.
///
/// Amounts are stored in centimes (two decimal places).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in centimes.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from centimes.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Parse a decimal string such as `"10"`, `"10.5"` or `"2500.00"`.
    ///
    /// Accepts an optional sign, digits, and an optional fractional part.
    /// Digits beyond the second decimal place round half-up. Returns `None`
    /// for anything else, including overflow.
    ///
    /// ```
    /// use boutique_commerce::money::Money;
    /// assert_eq!(Money::parse("49.99"), Some(Money::new(4999)));
    /// assert_eq!(Money::parse("abc"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        let (negative, digits) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let mantissa: Vec<u8> = whole.bytes().chain(frac.bytes()).map(|b| b - b'0').collect();
        Self::from_digits(negative, &mantissa, whole.len() as i64)
    }

    /// Parse the leading number of a string, ignoring whatever follows.
    ///
    /// Reads an optional sign, digits with an optional fractional part, and
    /// an optional exponent, so `"12.5 DA"` is 12.50 and `"1e3"` is 1000.
    /// Returns `None` when the string doesn't start with a number or the
    /// value overflows.
    ///
    /// ```
    /// use boutique_commerce::money::Money;
    /// assert_eq!(Money::parse_prefix("12.5 DA"), Some(Money::new(1250)));
    /// assert_eq!(Money::parse_prefix("DA 12.5"), None);
    /// ```
    pub fn parse_prefix(input: &str) -> Option<Self> {
        let s = input.trim_start().as_bytes();
        let mut i = 0;
        let negative = match s.first() {
            Some(b'-') => {
                i += 1;
                true
            }
            Some(b'+') => {
                i += 1;
                false
            }
            _ => false,
        };

        let mut mantissa: Vec<u8> = Vec::new();
        let mut point: i64 = 0;
        while let Some(b) = s.get(i).filter(|b| b.is_ascii_digit()) {
            mantissa.push(b - b'0');
            point += 1;
            i += 1;
        }
        if s.get(i) == Some(&b'.') {
            i += 1;
            while let Some(b) = s.get(i).filter(|b| b.is_ascii_digit()) {
                mantissa.push(b - b'0');
                i += 1;
            }
        }
        if mantissa.is_empty() {
            return None;
        }

        // an exponent only counts when at least one digit follows it
        if matches!(s.get(i), Some(b'e' | b'E')) {
            let mut j = i + 1;
            let exp_negative = match s.get(j) {
                Some(b'-') => {
                    j += 1;
                    true
                }
                Some(b'+') => {
                    j += 1;
                    false
                }
                _ => false,
            };
            let start = j;
            let mut exp: i64 = 0;
            while let Some(b) = s.get(j).filter(|b| b.is_ascii_digit()) {
                exp = exp.saturating_mul(10).saturating_add(i64::from(b - b'0'));
                j += 1;
            }
            if j > start {
                point = point.saturating_add(if exp_negative { -exp } else { exp });
            }
        }

        Self::from_digits(negative, &mantissa, point)
    }

    /// Build an amount from decimal digits with the point after `point`
    /// digits (negative or past the end is fine). Rounds half-up to centimes.
    fn from_digits(negative: bool, mantissa: &[u8], point: i64) -> Option<Self> {
        let leading = mantissa.iter().take_while(|d| **d == 0).count();
        let mantissa = &mantissa[leading..];
        if mantissa.is_empty() {
            return Some(Self::zero());
        }

        // digits left of the centimes position
        let kept = point.saturating_sub(leading as i64).saturating_add(2);
        if kept > 19 {
            return None;
        }

        let mut cents: i64 = 0;
        for k in 0..kept.max(0) {
            let digit = mantissa.get(k as usize).copied().unwrap_or(0);
            cents = cents.checked_mul(10)?.checked_add(i64::from(digit))?;
        }
        let round_up = usize::try_from(kept)
            .ok()
            .and_then(|k| mantissa.get(k))
            .is_some_and(|d| *d >= 5);
        if round_up {
            cents = cents.checked_add(1)?;
        }

        Some(Self::new(if negative { -cents } else { cents }))
    }

    /// Read a snapshot price for totals.
    ///
    /// Reads the leading number like [`Money::parse_prefix`]. Missing,
    /// non-numeric and negative prices all count as zero, so a bad snapshot
    /// can never make a total fail or go below zero.
    pub fn from_price(price: Option<&str>) -> Self {
        price
            .and_then(Self::parse_prefix)
            .filter(|m| !m.is_negative())
            .unwrap_or_default()
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Format with the currency symbol (e.g., "49.99 DA").
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), CURRENCY_SYMBOL)
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn checked_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }

    /// Add, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::new)
    }
}

impl Add for Money {
    type Output = Money;

    /// Saturating addition.
    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
