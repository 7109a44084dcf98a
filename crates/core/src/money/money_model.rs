//! Integer minor-unit money representation.
//!
//! Every balance and amount inside the engine is a whole number of the
//! currency's smallest unit. Decimal values exist only at the boundary:
//! display-currency amounts are converted on the way in and out, and the
//! plan return percentage is applied through [`Money::with_return_percent`],
//! which rounds exactly once.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money_errors::MoneyError;

/// Number of minor units in one display-currency unit.
const MINOR_UNITS_PER_MAJOR: Decimal = Decimal::ONE_HUNDRED;

/// A monetary amount in integer minor units (e.g. paise, cents).
///
/// Serializes as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Wraps a raw minor-unit value.
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// The raw minor-unit value.
    pub const fn minor(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Converts a display-currency amount (e.g. rupees) to minor units,
    /// rounding half-up to the nearest minor unit.
    pub fn from_major(major: Decimal) -> Result<Self, MoneyError> {
        (major * MINOR_UNITS_PER_MAJOR)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Money)
            .ok_or(MoneyError::OutOfRange)
    }

    /// The display-currency value of this amount.
    pub fn to_major(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    pub fn checked_add(self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::OutOfRange)
    }

    pub fn checked_sub(self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::OutOfRange)
    }

    /// Applies a fixed return percentage to a principal, producing the
    /// frozen payout of an investment: `round(principal * (1 + percent/100))`.
    ///
    /// Rounding is half-up on the minor-unit result and happens exactly
    /// once, at investment-open time. The stored result is what a claim
    /// pays out; it is never recomputed.
    pub fn with_return_percent(&self, percent: Decimal) -> Result<Money, MoneyError> {
        let factor = Decimal::ONE + percent / Decimal::ONE_HUNDRED;
        (Decimal::from(self.0) * factor)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Money)
            .ok_or(MoneyError::OutOfRange)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(minor: i64) -> Self {
        Money(minor)
    }
}
