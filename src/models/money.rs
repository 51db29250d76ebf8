//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! precision issues. Conversion to and from the display scale goes through
//! `rust_decimal` so the cent boundary rounds the same way everywhere.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{FinanceError, FinanceResult};

/// Number of minor units in one display unit
pub const MINOR_UNITS_PER_UNIT: i64 = 100;

/// Represents a monetary amount stored as minor units (hundredths of the currency unit)
///
/// Ledger amounts are never negative, but derived values such as balances,
/// remaining budget and savings can be, so the representation is signed.
/// Arithmetic saturates at the bounds of `i64` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use finance_tracker::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.minor(), 1050);
    /// ```
    pub const fn from_minor(units: i64) -> Self {
        Self(units)
    }

    /// Create a Money amount from whole units and minor units
    pub const fn from_units_minor(units: i64, minor: i64) -> Self {
        Self(units * MINOR_UNITS_PER_UNIT + minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / MINOR_UNITS_PER_UNIT
    }

    /// Get the minor portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_UNITS_PER_UNIT).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Convert a display-scale amount to minor units
    ///
    /// Rounds half away from zero at the cent boundary, so `12.345` becomes
    /// `1235` and `-12.345` becomes `-1235`.
    pub fn from_decimal(amount: Decimal) -> FinanceResult<Self> {
        let scaled = amount
            .checked_mul(Decimal::from(MINOR_UNITS_PER_UNIT))
            .ok_or_else(|| FinanceError::AmountOutOfRange(amount.to_string()))?;

        scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Self)
            .ok_or_else(|| FinanceError::AmountOutOfRange(amount.to_string()))
    }

    /// Convert to a display-scale amount (exact)
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Share of `whole` this amount represents, as a percentage
    ///
    /// Returns 0 when `whole` is zero.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            0.0
        } else {
            self.0 as f64 / whole.0 as f64 * 100.0
        }
    }

    /// Add, returning `None` on overflow
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Divide evenly into `parts`, rounding half away from zero
    ///
    /// Returns zero when `parts` is zero.
    pub fn divide_rounded(&self, parts: u32) -> Money {
        if parts == 0 {
            return Money::zero();
        }
        let parts = i64::from(parts);
        let quotient = self.0 / parts;
        let remainder = self.0 % parts;
        if remainder.abs() * 2 >= parts {
            Self(quotient + self.0.signum())
        } else {
            Self(quotient)
        }
    }

    /// Parse a money amount from a display string
    ///
    /// Accepts formats: "10.50", "-10.50", "Rs 10.50", "$10.50", "10", "12.345"
    /// (rounded to the nearest minor unit).
    pub fn parse(s: &str) -> FinanceResult<Self> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        // Drop a leading currency symbol or code
        let digits = rest
            .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.')
            .trim();

        let value = Decimal::from_str(digits)
            .map_err(|_| FinanceError::Validation(format!("Invalid money format: {}", s)))?;

        let money = Self::from_decimal(value)?;
        Ok(if negative { -money } else { money })
    }

    /// Format with a currency symbol
    ///
    /// Alphabetic symbols ("Rs", "EUR") are separated from the digits by a space.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let separator = if symbol.ends_with(|c: char| c.is_alphabetic()) {
            " "
        } else {
            ""
        };
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}{}.{:02}",
            sign,
            symbol,
            separator,
            self.units().abs(),
            self.minor_part()
        )
    }
}

/// Convert a display-scale amount to minor units
pub fn to_minor_units(amount: Decimal) -> FinanceResult<Money> {
    Money::from_decimal(amount)
}

/// Convert minor units to a display-scale amount
pub fn from_minor_units(amount: Money) -> Decimal {
    amount.to_decimal()
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.minor_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max + Money::from_minor(1), max);
        assert_eq!(max.checked_add(Money::from_minor(1)), None);
        assert_eq!(
            Money::from_minor(1).checked_add(Money::from_minor(2)),
            Some(Money::from_minor(3))
        );

        let total: Money = [max, Money::from_minor(1)].iter().sum();
        assert_eq!(total, max);

        let mut balance = Money::from_minor(i64::MIN);
        balance -= Money::from_minor(1);
        assert_eq!(balance.minor(), i64::MIN);
        assert_eq!((-balance).minor(), i64::MAX);
    }

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.minor_part(), 50);
        assert_eq!(Money::from_units_minor(10, 50), m);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1050).to_string(), "10.50");
        assert_eq!(Money::from_minor(0).to_string(), "0.00");
        assert_eq!(Money::from_minor(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_minor(1250).format_with_symbol("Rs"), "Rs 12.50");
        assert_eq!(Money::from_minor(1250).format_with_symbol("$"), "$12.50");
        assert_eq!(Money::from_minor(-75).format_with_symbol("$"), "-$0.75");
    }

    #[test]
    fn test_to_minor_units_rounds_half_away_from_zero() {
        assert_eq!(to_minor_units(dec!(12.50)).unwrap().minor(), 1250);
        assert_eq!(to_minor_units(dec!(12.345)).unwrap().minor(), 1235);
        assert_eq!(to_minor_units(dec!(12.344)).unwrap().minor(), 1234);
        assert_eq!(to_minor_units(dec!(0.005)).unwrap().minor(), 1);
        assert_eq!(to_minor_units(dec!(-12.345)).unwrap().minor(), -1235);
    }

    #[test]
    fn test_from_minor_units_is_exact() {
        assert_eq!(from_minor_units(Money::from_minor(1250)), dec!(12.50));
        assert_eq!(from_minor_units(Money::from_minor(1)), dec!(0.01));
    }

    #[test]
    fn test_round_trip_within_half_cent() {
        for input in [dec!(0.004), dec!(0.005), dec!(19.999), dec!(123.456), dec!(7)] {
            let back = from_minor_units(to_minor_units(input).unwrap());
            assert!((back - input).abs() <= dec!(0.005), "{} -> {}", input, back);
        }
    }

    #[test]
    fn test_round_trip_idempotent_from_minor() {
        for units in [0, 1, 99, 100, 12345, 987_654_321] {
            let display = from_minor_units(Money::from_minor(units));
            let again = from_minor_units(to_minor_units(display).unwrap());
            assert_eq!(again, display);
        }
    }

    #[test]
    fn test_out_of_range() {
        let err = to_minor_units(Decimal::MAX).unwrap_err();
        assert!(matches!(err, FinanceError::AmountOutOfRange(_)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("Rs 10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor(), -1050);
        assert_eq!(Money::parse("10").unwrap().minor(), 1000);
        assert_eq!(Money::parse("0.125").unwrap().minor(), 13);
        assert!(Money::parse("ten").is_err());
    }

    #[test]
    fn test_percent_of() {
        let part = Money::from_minor(2500);
        assert_eq!(part.percent_of(Money::from_minor(10000)), 25.0);
        assert_eq!(part.percent_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_divide_rounded() {
        assert_eq!(Money::from_minor(1000).divide_rounded(3).minor(), 333);
        assert_eq!(Money::from_minor(1001).divide_rounded(2).minor(), 501);
        assert_eq!(Money::from_minor(-1001).divide_rounded(2).minor(), -501);
        assert_eq!(Money::from_minor(310_000).divide_rounded(31).minor(), 10_000);
        assert_eq!(Money::from_minor(500).divide_rounded(0), Money::zero());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);
        assert_eq!((a + b).minor(), 1500);
        assert_eq!((b - a).minor(), -500);
        assert_eq!((-a).minor(), -1000);

        let amounts = [a, b, Money::from_minor(250)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.minor(), 1750);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
