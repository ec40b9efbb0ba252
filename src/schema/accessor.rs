//! Derived money accessors.
//!
//! A [`MoneyAccessor`] is the compose/decompose pair behind one monetized
//! field: reads rebuild a [`Money`] from the backing column(s), writes
//! convert the assigned value and decompose it back into them. The two
//! closures are built once, at declaration time, from the resolved field and
//! the presence of the row currency column.

use super::field::MonetizedField;
use crate::error::{MonetizeError, Result};
use crate::money::{Currency, Money, ToMoney};
use crate::record::{ColumnAccess, ColumnValue};
use smallvec::SmallVec;
use std::sync::Arc;

/// Compose function: backing column values to money
type Composer = Arc<dyn Fn(Option<i64>, Option<Currency>) -> Money + Send + Sync>;

/// Convert function: assigned value plus resolved row currency to money
type Converter = Arc<dyn Fn(&dyn ToMoney, Option<Currency>) -> Result<Money> + Send + Sync>;

/// A derived money field on a record schema
#[derive(Clone)]
pub struct MoneyAccessor {
    /// The resolved declaration this accessor was built from
    pub field: MonetizedField,
    backing: SmallVec<[String; 2]>,
    composer: Composer,
    converter: Converter,
}

impl MoneyAccessor {
    /// Build the accessor for a resolved field
    ///
    /// `has_currency_column` is the schema's answer to whether the field's
    /// `model_currency_name` is a real attribute; it decides which closure
    /// pair backs the accessor.
    pub(crate) fn build(
        field: MonetizedField,
        has_currency_column: bool,
        default_currency: Currency,
    ) -> Self {
        let mut backing: SmallVec<[String; 2]> = SmallVec::new();
        backing.push(field.subunit_name.clone());

        let field_currency = field.field_currency;

        let (composer, converter): (Composer, Converter) = if has_currency_column {
            backing.push(field.model_currency_name.clone());

            let composer: Composer = Arc::new(move |subunits, row_currency| {
                Money::new(
                    subunits.unwrap_or(0),
                    field_currency.or(row_currency).unwrap_or(default_currency),
                )
            });
            let converter: Converter = Arc::new(move |value, row_currency| {
                value.to_money(field_currency.or(row_currency))
            });

            (composer, converter)
        } else {
            let composer: Composer = Arc::new(move |subunits, _| {
                Money::new(
                    subunits.unwrap_or(0),
                    field_currency.unwrap_or(default_currency),
                )
            });
            // Columnless records inject no row currency; conversion relies on
            // the override or the value's own currency.
            let converter: Converter = Arc::new(move |value, _| value.to_money(field_currency));

            (composer, converter)
        };

        Self {
            field,
            backing,
            composer,
            converter,
        }
    }

    /// The physical columns backing this accessor
    #[must_use]
    pub fn backing_columns(&self) -> &[String] {
        &self.backing
    }

    /// Whether the accessor is also backed by a row currency column
    #[must_use]
    pub fn has_currency_column(&self) -> bool {
        self.backing.len() == 2
    }

    /// Compose the money value from the record's backing columns
    pub fn read(&self, record: &dyn ColumnAccess) -> Result<Money> {
        let subunits = self.read_subunits(record)?;
        let row_currency = self.read_row_currency(record)?;

        Ok((self.composer)(subunits, row_currency))
    }

    /// Convert an assigned value and decompose it into the backing columns
    ///
    /// On conversion failure the backing columns are left untouched.
    pub fn write(&self, record: &mut dyn ColumnAccess, value: &dyn ToMoney) -> Result<Money> {
        let row_currency = self.read_row_currency(record)?;
        let money = (self.converter)(value, row_currency)?;

        record.set_column(&self.field.subunit_name, ColumnValue::Integer(money.subunits()));
        if self.has_currency_column() {
            record.set_column(
                &self.field.model_currency_name,
                ColumnValue::Text(money.currency().code().to_string()),
            );
        }

        Ok(money)
    }

    fn read_subunits(&self, record: &dyn ColumnAccess) -> Result<Option<i64>> {
        match record.column(&self.field.subunit_name) {
            Some(ColumnValue::Integer(n)) => Ok(Some(*n)),
            Some(ColumnValue::Null) | None => Ok(None),
            Some(other) => Err(MonetizeError::NonNumericSubunits {
                column: self.field.subunit_name.clone(),
                found: other.type_name(),
            }),
        }
    }

    fn read_row_currency(&self, record: &dyn ColumnAccess) -> Result<Option<Currency>> {
        if !self.has_currency_column() {
            return Ok(None);
        }

        match record.column(&self.field.model_currency_name) {
            Some(ColumnValue::Text(code)) => Currency::from_code(code).map(Some),
            Some(ColumnValue::Null) | None => Ok(None),
            Some(other) => Err(MonetizeError::UnknownCurrency(other.type_name().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonetizeConfig;
    use crate::record::Record;
    use crate::schema::options::MonetizeOptions;

    fn accessor(options: MonetizeOptions, has_currency_column: bool) -> MoneyAccessor {
        let config = MonetizeConfig::default();
        let field = MonetizedField::resolve("price_cents", &options, &config).unwrap();
        MoneyAccessor::build(field, has_currency_column, config.default_currency)
    }

    #[test]
    fn test_read_uses_row_currency() {
        let record = Record::new()
            .with_column("price_cents", ColumnValue::Integer(1000))
            .with_column("currency", ColumnValue::Text("gbp".to_string()));
        let accessor = accessor(MonetizeOptions::new(), true);

        assert_eq!(
            accessor.read(&record).unwrap(),
            Money::new(1000, Currency::Gbp)
        );
    }

    #[test]
    fn test_read_missing_subunits_composes_zero() {
        let record = Record::new().with_column("currency", ColumnValue::Text("eur".to_string()));
        let accessor = accessor(MonetizeOptions::new(), true);

        assert_eq!(accessor.read(&record).unwrap(), Money::new(0, Currency::Eur));
    }

    #[test]
    fn test_read_falls_back_to_default_currency() {
        let record = Record::new().with_column("price_cents", ColumnValue::Integer(250));

        let with_column = accessor(MonetizeOptions::new(), true);
        assert_eq!(
            with_column.read(&record).unwrap(),
            Money::new(250, Currency::Usd)
        );

        let without_column = accessor(MonetizeOptions::new(), false);
        assert_eq!(
            without_column.read(&record).unwrap(),
            Money::new(250, Currency::Usd)
        );
    }

    #[test]
    fn test_override_beats_row_currency() {
        let record = Record::new()
            .with_column("price_cents", ColumnValue::Integer(1000))
            .with_column("currency", ColumnValue::Text("gbp".to_string()));
        let accessor = accessor(MonetizeOptions::new().with_currency("eur"), true);

        assert_eq!(
            accessor.read(&record).unwrap().currency(),
            Currency::Eur
        );
    }

    #[test]
    fn test_write_updates_both_columns() {
        let mut record = Record::new()
            .with_column("price_cents", ColumnValue::Integer(1000))
            .with_column("currency", ColumnValue::Text("gbp".to_string()));
        let accessor = accessor(MonetizeOptions::new(), true);

        accessor
            .write(&mut record, &Money::new(500, Currency::Usd))
            .unwrap();

        assert_eq!(
            record.column("price_cents"),
            Some(&ColumnValue::Integer(500))
        );
        assert_eq!(
            record.column("currency"),
            Some(&ColumnValue::Text("usd".to_string()))
        );
    }

    #[test]
    fn test_write_without_currency_column_stores_subunits_only() {
        let mut record = Record::new();
        let accessor = accessor(MonetizeOptions::new(), false);

        accessor
            .write(&mut record, &Money::new(750, Currency::Dkk))
            .unwrap();

        assert_eq!(
            record.column("price_cents"),
            Some(&ColumnValue::Integer(750))
        );
        assert_eq!(record.column("currency"), None);
    }

    #[test]
    fn test_write_converts_with_row_currency_hint() {
        let mut record = Record::new()
            .with_column("price_cents", ColumnValue::Integer(0))
            .with_column("currency", ColumnValue::Text("gbp".to_string()));
        let accessor = accessor(MonetizeOptions::new(), true);

        // A bare subunit count takes the row currency.
        accessor.write(&mut record, &1999i64).unwrap();

        assert_eq!(
            record.column("price_cents"),
            Some(&ColumnValue::Integer(1999))
        );
        assert_eq!(
            record.column("currency"),
            Some(&ColumnValue::Text("gbp".to_string()))
        );
    }

    #[test]
    fn test_failed_write_leaves_columns_unchanged() {
        let mut record = Record::new()
            .with_column("price_cents", ColumnValue::Integer(1000))
            .with_column("currency", ColumnValue::Text("gbp".to_string()));
        let accessor = accessor(MonetizeOptions::new(), true);

        let err = accessor
            .write(&mut record, &ColumnValue::Boolean(true))
            .unwrap_err();

        assert_eq!(err.to_string(), "can't convert Boolean to Money");
        assert_eq!(
            record.column("price_cents"),
            Some(&ColumnValue::Integer(1000))
        );
        assert_eq!(
            record.column("currency"),
            Some(&ColumnValue::Text("gbp".to_string()))
        );
    }

    #[test]
    fn test_read_rejects_non_numeric_subunits() {
        let record = Record::new()
            .with_column("price_cents", ColumnValue::Text("lots".to_string()));
        let accessor = accessor(MonetizeOptions::new(), false);

        let err = accessor.read(&record).unwrap_err();
        assert!(err.to_string().contains("price_cents"));
    }

    #[test]
    fn test_read_rejects_unknown_row_currency() {
        let record = Record::new()
            .with_column("price_cents", ColumnValue::Integer(100))
            .with_column("currency", ColumnValue::Text("zzz".to_string()));
        let accessor = accessor(MonetizeOptions::new(), true);

        assert!(matches!(
            accessor.read(&record),
            Err(MonetizeError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_backing_columns() {
        let one = accessor(MonetizeOptions::new(), false);
        assert_eq!(one.backing_columns(), ["price_cents"]);

        let two = accessor(MonetizeOptions::new(), true);
        assert_eq!(two.backing_columns(), ["price_cents", "currency"]);
        assert!(two.has_currency_column());
    }
}
