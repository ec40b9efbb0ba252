//! The `to_money` conversion capability.
//!
//! Any value assignable to a monetized accessor implements [`ToMoney`]. The
//! hint argument carries the currency the accessor resolved for the write
//! (field override, else row currency); values with a currency of their own
//! ignore it.

use super::{Currency, Money};
use crate::error::{MonetizeError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Conversion of an assigned value into [`Money`]
pub trait ToMoney {
    /// Convert into money, using `hint` when the value has no currency of
    /// its own. Fails when no currency can be resolved at all.
    fn to_money(&self, hint: Option<Currency>) -> Result<Money>;
}

/// References convert exactly as the value they point at.
impl<T: ToMoney + ?Sized> ToMoney for &T {
    fn to_money(&self, hint: Option<Currency>) -> Result<Money> {
        (**self).to_money(hint)
    }
}

/// A money value keeps its own currency; the hint never re-denominates it.
impl ToMoney for Money {
    fn to_money(&self, _hint: Option<Currency>) -> Result<Money> {
        Ok(*self)
    }
}

/// Bare integers are subunit counts and carry no currency of their own.
impl ToMoney for i64 {
    fn to_money(&self, hint: Option<Currency>) -> Result<Money> {
        let currency = hint.ok_or(MonetizeError::NoCurrency)?;
        Ok(Money::new(*self, currency))
    }
}

/// Decimals are major-unit amounts, scaled by the currency exponent.
impl ToMoney for Decimal {
    fn to_money(&self, hint: Option<Currency>) -> Result<Money> {
        let currency = hint.ok_or(MonetizeError::NoCurrency)?;
        Money::from_decimal(*self, currency)
    }
}

impl ToMoney for f64 {
    fn to_money(&self, hint: Option<Currency>) -> Result<Money> {
        let amount = Decimal::from_f64(*self).ok_or_else(|| MonetizeError::UnconvertibleValue {
            kind: format!("non-finite float {self}"),
        })?;
        amount.to_money(hint)
    }
}

/// Strings parse as major-unit decimal amounts.
impl ToMoney for str {
    fn to_money(&self, hint: Option<Currency>) -> Result<Money> {
        let amount: Decimal =
            self.parse()
                .map_err(|_| MonetizeError::UnconvertibleValue {
                    kind: format!("string {self:?}"),
                })?;
        amount.to_money(hint)
    }
}

impl ToMoney for String {
    fn to_money(&self, hint: Option<Currency>) -> Result<Money> {
        self.as_str().to_money(hint)
    }
}
