//! The Money value type and its conversion capability.
//!
//! A [`Money`] is an integer count of minor units plus a [`Currency`]. There
//! is deliberately no arithmetic or exchange support here; monetized fields
//! only compose and decompose values.

pub mod convert;
pub mod currency;

pub use convert::ToMoney;
pub use currency::Currency;

use crate::error::{MonetizeError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount: subunit count plus currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    subunits: i64,
    currency: Currency,
}

impl Money {
    /// Create a money value from a subunit count
    #[must_use]
    pub const fn new(subunits: i64, currency: Currency) -> Self {
        Self { subunits, currency }
    }

    /// The stored subunit count (e.g. cents)
    #[must_use]
    pub const fn subunits(self) -> i64 {
        self.subunits
    }

    /// The currency of this amount
    #[must_use]
    pub const fn currency(self) -> Currency {
        self.currency
    }

    /// The amount in major units as a decimal
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.subunits, self.currency.exponent())
    }

    /// Build a money value from a major-unit decimal amount
    ///
    /// The amount is scaled by the currency exponent and rounded half-up to
    /// the nearest subunit. Fails when the scaled amount does not fit `i64`.
    pub fn from_decimal(amount: Decimal, currency: Currency) -> Result<Self> {
        let scaled = amount
            .checked_mul(Decimal::from(currency.subunits_per_unit()))
            .ok_or_else(|| MonetizeError::AmountOutOfRange(amount.to_string()))?;

        let subunits = scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or_else(|| MonetizeError::AmountOutOfRange(amount.to_string()))?;

        Ok(Self::new(subunits, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal(), self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_money_creation() {
        let price = Money::new(1000, Currency::Gbp);

        assert_eq!(price.subunits(), 1000);
        assert_eq!(price.currency(), Currency::Gbp);
    }

    #[test]
    fn test_to_decimal_uses_exponent() {
        assert_eq!(
            Money::new(1050, Currency::Usd).to_decimal(),
            Decimal::from_str("10.50").unwrap()
        );
        assert_eq!(
            Money::new(1050, Currency::Jpy).to_decimal(),
            Decimal::from(1050)
        );
    }

    #[test]
    fn test_from_decimal_rounds_to_subunit() {
        let m = Money::from_decimal(Decimal::from_str("10.505").unwrap(), Currency::Usd).unwrap();
        assert_eq!(m.subunits(), 1051);

        let m = Money::from_decimal(Decimal::from_str("10.504").unwrap(), Currency::Usd).unwrap();
        assert_eq!(m.subunits(), 1050);
    }

    #[test]
    fn test_from_decimal_out_of_range() {
        let huge = Decimal::MAX;
        assert!(Money::from_decimal(huge, Currency::Usd).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(1050, Currency::Usd).to_string(), "10.50 USD");
        assert_eq!(Money::new(500, Currency::Jpy).to_string(), "500 JPY");
    }
}
