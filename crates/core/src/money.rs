//! Monetary amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative decimal amount in the shop currency.
///
/// Amounts carry no currency code; the pipeline works in a single currency.
/// Arithmetic is checked: results outside the `Decimal` range are `None`,
/// never clamped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Create an amount, rejecting negative values.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "amount cannot be negative (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Whole amount without fractional part (e.g. `Money::whole(3000)`).
    pub fn whole(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a quantity (line total). `None` on overflow.
    pub fn checked_times(self, quantity: u64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// `None` on overflow.
    pub fn checked_plus(self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl ValueObject for Money {}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}
