//! Money type for representing currency amounts and rates
//!
//! Wraps an exact `Decimal` so balances, sources, and interest rates never
//! touch binary floating point. Rates are stored as fractions (0.02 for 2%)
//! in the same type.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LedgerError, LedgerResult};

/// Currency symbol used when no setting says otherwise
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// An exact decimal amount (or rate)
///
/// Ordering and equality compare numeric value, so `1020.00` equals
/// `1020.0000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Fractional digits kept after interest accrual.
    ///
    /// Products of amounts and rates are exact; rounding only kicks in once
    /// repeated accrual would push past this scale.
    pub const STORAGE_SCALE: u32 = 10;

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The value one (a 100% rate)
    pub const fn one() -> Self {
        Self(Decimal::ONE)
    }

    /// Create an amount from a whole number
    pub fn from_int(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Wrap an existing decimal
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the underlying decimal
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Parse an amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$10.50", "10", "1e-3"
    pub fn parse(s: &str) -> LedgerResult<Self> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        if rest.is_empty() || rest.starts_with('-') || rest.starts_with('+') && negative {
            return Err(LedgerError::InvalidNumber(s.to_string()));
        }

        let value = Decimal::from_str(rest)
            .or_else(|_| Decimal::from_scientific(rest))
            .map_err(|_| LedgerError::InvalidNumber(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Convert a percentage to a fraction ("12" -> 0.12)
    pub fn percent_to_fraction(self) -> Self {
        Self(self.0 / Decimal::ONE_HUNDRED)
    }

    /// Convert a fraction to a percentage (0.12 -> "12")
    pub fn fraction_to_percent(self) -> Self {
        Self(self.0 * Decimal::ONE_HUNDRED)
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Check if this value is a valid rate, i.e. within [0, 1]
    pub fn is_unit_fraction(&self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE
    }

    /// `self * (1 + rate)`, the value after one period of interest
    ///
    /// Fails with `Overflow` instead of panicking when the result does not
    /// fit in a `Decimal`.
    pub fn grown_by(self, rate: Money) -> LedgerResult<Self> {
        Decimal::ONE
            .checked_add(rate.0)
            .and_then(|factor| self.0.checked_mul(factor))
            .map(|grown| Self(grown.round_dp(Self::STORAGE_SCALE)))
            .ok_or_else(|| LedgerError::Overflow(format!("{} grown by {}", self, rate.format_percent())))
    }

    /// Addition that fails with `Overflow` instead of panicking
    pub fn checked_add(self, other: Money) -> LedgerResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| LedgerError::Overflow(format!("{} + {}", self, other)))
    }

    /// Subtraction that fails with `Overflow` instead of panicking
    pub fn checked_sub(self, other: Money) -> LedgerResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| LedgerError::Overflow(format!("{} - {}", self, other)))
    }

    /// Sum that fails with `Overflow` instead of panicking
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> LedgerResult<Self> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }

    /// Full-precision decimal text, used for persistence
    pub fn to_plain_string(&self) -> String {
        self.0.to_string()
    }

    /// Format rounded to cents with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let mut cents = self.0.abs().round_dp(2);
        cents.rescale(2);
        if self.0.round_dp(2).is_sign_negative() && !cents.is_zero() {
            format!("-{}{}", symbol, cents)
        } else {
            format!("{}{}", symbol, cents)
        }
    }

    /// Format a fractional rate as a percentage ("0.025" -> "2.5%")
    pub fn format_percent(&self) -> String {
        format!("{}%", self.fraction_to_percent().0.normalize())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl FromStr for Money {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
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

impl Mul for Money {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// Serialized as a string so no digits are lost to a float round trip.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number or a string containing one")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money::from_int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        // Display for f64 prints the shortest text that reads back as `v`.
        let text = v.to_string();
        Money::parse(&text).map_err(|_| E::invalid_value(de::Unexpected::Float(v), &self))
    }

    // serde_json with `arbitrary_precision` hands numbers over as a
    // single-entry map holding the literal text.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Money, A::Error> {
        match map.next_key::<String>()?.as_deref() {
            Some(JSON_NUMBER_TOKEN) => {
                let text: String = map.next_value()?;
                Money::parse(&text)
                    .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&text), &self))
            }
            _ => Err(de::Error::invalid_type(de::Unexpected::Map, &self)),
        }
    }
}

const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}
