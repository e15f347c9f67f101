//! Money value type with exact minor-unit arithmetic.
//!
//! A [`Money`] pairs an `i64` count of minor units with a shared
//! [`Currency`](crate::currency::Currency) handle. The integer count is the
//! sole source of truth; no floating point enters any computation. Values
//! are never mutated in place: every operation produces a fresh `Money` of
//! the same currency and rounding mode.

pub mod error;
#[cfg(test)]
mod props;

pub use error::MoneyError;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bank::{Bank, BankError};
use crate::currency::{CurrencyRef, catalog};
use crate::format::FormatRules;

/// Midpoint rounding strategy used when a decimal amount is reduced to an
/// integer count of minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Round half to even (banker's rounding). This is the default.
    #[default]
    ToEven,
    /// Round half away from zero.
    AwayFromZero,
}

impl RoundingMode {
    pub(crate) const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::ToEven => RoundingStrategy::MidpointNearestEven,
            Self::AwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

/// An exact amount of a specific currency.
///
/// Equality and hashing cover the currency code and the minor-unit count;
/// the rounding mode is a computation preference, not value state.
#[derive(Debug, Clone)]
pub struct Money {
    fractional: i64,
    currency: CurrencyRef,
    rounding: RoundingMode,
}

impl Money {
    /// Creates a money value from an exact minor-unit count.
    #[must_use]
    pub fn new(fractional: i64, currency: CurrencyRef) -> Self {
        Self {
            fractional,
            currency,
            rounding: RoundingMode::default(),
        }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: CurrencyRef) -> Self {
        Self::new(0, currency)
    }

    /// Creates a money value from a major-unit decimal amount, rounding to
    /// the nearest minor unit with banker's rounding.
    ///
    /// The conversion runs entirely in decimal arithmetic, so
    /// `from_amount(dec!(49.99), usd)` is exactly 4999 cents.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::AmountOutOfRange`] when the scaled amount does
    /// not fit the minor-unit range.
    pub fn from_amount(amount: Decimal, currency: CurrencyRef) -> Result<Self, MoneyError> {
        Self::from_amount_with(amount, currency, RoundingMode::default())
    }

    /// Creates a money value from a major-unit decimal amount under an
    /// explicit midpoint rounding mode.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::AmountOutOfRange`] when the scaled amount does
    /// not fit the minor-unit range.
    pub fn from_amount_with(
        amount: Decimal,
        currency: CurrencyRef,
        rounding: RoundingMode,
    ) -> Result<Self, MoneyError> {
        let scaled = amount
            .checked_mul(Decimal::from(currency.minor_unit.per_major))
            .ok_or(MoneyError::AmountOutOfRange)?;
        let fractional = scaled
            .round_dp_with_strategy(0, rounding.strategy())
            .to_i64()
            .ok_or(MoneyError::AmountOutOfRange)?;
        Ok(Self {
            fractional,
            currency,
            rounding,
        })
    }

    /// Returns the same value carrying a different rounding mode.
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// The exact minor-unit count.
    #[must_use]
    pub const fn fractional(&self) -> i64 {
        self.fractional
    }

    /// The currency of this value.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyRef {
        &self.currency
    }

    /// The midpoint rounding mode carried by this value.
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The amount in major units, exact.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.fractional) / Decimal::from(self.currency.minor_unit.per_major.max(1))
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.fractional == 0
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.fractional < 0
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.fractional > 0
    }

    /// The absolute value, saturating at the range edge.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_fractional(self.fractional.saturating_abs())
    }

    /// Adds another value of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] when the currencies differ
    /// and [`MoneyError::AmountOutOfRange`] on overflow.
    pub fn try_add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let fractional = self
            .fractional
            .checked_add(other.fractional)
            .ok_or(MoneyError::AmountOutOfRange)?;
        Ok(self.with_fractional(fractional))
    }

    /// Subtracts another value of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] when the currencies differ
    /// and [`MoneyError::AmountOutOfRange`] on overflow.
    pub fn try_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let fractional = self
            .fractional
            .checked_sub(other.fractional)
            .ok_or(MoneyError::AmountOutOfRange)?;
        Ok(self.with_fractional(fractional))
    }

    /// Rounds the minor-unit count to the nearest multiple of the currency's
    /// smallest physical denomination, under this value's rounding mode.
    ///
    /// Negating the input negates the output, and an already-rounded value
    /// is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::MissingAttribute`] when the currency defines no
    /// smallest denomination.
    pub fn round_to_nearest_cash_value(&self) -> Result<i64, MoneyError> {
        let denomination = self
            .currency
            .minor_unit
            .smallest_denomination
            .filter(|d| *d > 0)
            .ok_or_else(|| MoneyError::MissingAttribute {
                currency: self.currency.code.clone(),
                attribute: "smallest_denomination",
            })?;
        let step = Decimal::from(denomination);
        let steps = (Decimal::from(self.fractional) / step)
            .round_dp_with_strategy(0, self.rounding.strategy());
        steps
            .checked_mul(step)
            .and_then(|rounded| rounded.to_i64())
            .ok_or(MoneyError::AmountOutOfRange)
    }

    /// Exchanges this value into another currency through the given bank.
    ///
    /// The bank is borrowed for the call; `Money` never owns one.
    ///
    /// # Errors
    ///
    /// Propagates the bank's failure, typically
    /// [`BankError::UnknownRate`](crate::bank::BankError::UnknownRate).
    pub fn exchange(&self, bank: &dyn Bank, to: CurrencyRef) -> Result<Self, BankError> {
        bank.exchange(self, to)
    }

    /// Renders this value with the currency's default formatting.
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with(&FormatRules::default())
    }

    /// Renders this value with explicit rule overrides.
    #[must_use]
    pub fn format_with(&self, rules: &FormatRules) -> String {
        crate::format::format(self, rules)
    }

    fn with_fractional(&self, fractional: i64) -> Self {
        Self {
            fractional,
            currency: CurrencyRef::clone(&self.currency),
            rounding: self.rounding,
        }
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.code.clone(),
                right: other.currency.code.clone(),
            })
        }
    }

    fn assert_same_currency(&self, other: &Self, operation: &str) {
        assert!(
            self.currency == other.currency,
            "cannot {operation} {} and {}: exchange first",
            self.currency,
            other.currency,
        );
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.fractional == other.fractional && self.currency == other.currency
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.code.hash(state);
        self.fractional.hash(state);
    }
}

impl PartialOrd for Money {
    /// Values of different currencies have no order; exchange first.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency == other.currency {
            Some(self.fractional.cmp(&other.fractional))
        } else {
            None
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// # Panics
///
/// Panics when the currencies differ or the sum overflows the minor-unit
/// range; use [`Money::try_add`] to handle either as an error.
impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.assert_same_currency(&rhs, "add");
        let fractional = self
            .fractional
            .checked_add(rhs.fractional)
            .expect("minor-unit overflow");
        self.with_fractional(fractional)
    }
}

impl Add<i64> for Money {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        let fractional = self.fractional.checked_add(rhs).expect("minor-unit overflow");
        self.with_fractional(fractional)
    }
}

/// # Panics
///
/// Panics when the currencies differ or the difference overflows the
/// minor-unit range; use [`Money::try_sub`] to handle either as an error.
impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.assert_same_currency(&rhs, "subtract");
        let fractional = self
            .fractional
            .checked_sub(rhs.fractional)
            .expect("minor-unit overflow");
        self.with_fractional(fractional)
    }
}

impl Sub<i64> for Money {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self {
        let fractional = self.fractional.checked_sub(rhs).expect("minor-unit overflow");
        self.with_fractional(fractional)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        let fractional = self.fractional.checked_mul(rhs).expect("minor-unit overflow");
        self.with_fractional(fractional)
    }
}

/// Integer division, truncating toward zero.
///
/// # Panics
///
/// Panics when `rhs` is zero.
impl Div<i64> for Money {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        self.with_fractional(self.fractional / rhs)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Money", 2)?;
        state.serialize_field("fractional", &self.fractional)?;
        state.serialize_field("currency", &self.currency.code)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct MoneyRepr {
    fractional: i64,
    currency: String,
}

impl<'de> Deserialize<'de> for Money {
    /// Resolves the currency code against the default catalog, so a
    /// deserialized value shares the registered definition.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MoneyRepr::deserialize(deserializer)?;
        let currency = catalog()
            .get(&repr.currency)
            .map_err(serde::de::Error::custom)?;
        Ok(Self::new(repr.fractional, currency))
    }
}
