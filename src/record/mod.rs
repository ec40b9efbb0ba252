//! Minimal record abstraction consumed by the monetization layer.
//!
//! The schema side only needs two things from a record: read a column by
//! name and write a column by name. [`Record`] is the in-memory
//! implementation used in tests and by callers without their own row type.

use crate::error::{MonetizeError, Result};
use crate::money::{Currency, Money, ToMoney};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A dynamically typed scalar stored in a record column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnValue {
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// Boolean value
    Boolean(bool),
    /// Missing value
    Null,
}

impl ColumnValue {
    /// Variant name, for error messages
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Text(_) => "Text",
            Self::Boolean(_) => "Boolean",
            Self::Null => "Null",
        }
    }

    /// The integer value, if this is an integer
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The text value, if this is text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is the null value
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Dynamic column values convert when their payload does; booleans and nulls
/// never do.
impl ToMoney for ColumnValue {
    fn to_money(&self, hint: Option<Currency>) -> Result<Money> {
        match self {
            Self::Integer(n) => n.to_money(hint),
            Self::Float(f) => f.to_money(hint),
            Self::Text(s) => s.as_str().to_money(hint),
            Self::Boolean(_) | Self::Null => Err(MonetizeError::UnconvertibleValue {
                kind: self.type_name().to_string(),
            }),
        }
    }
}

/// Read/write access to a record's physical columns
pub trait ColumnAccess {
    /// Get the value stored in a column, `None` when the column is unset
    fn column(&self, name: &str) -> Option<&ColumnValue>;

    /// Store a value into a column
    fn set_column(&mut self, name: &str, value: ColumnValue);
}

/// An in-memory record keyed by column name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    columns: FxHashMap<String, ColumnValue>,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column value, builder style
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, value: ColumnValue) -> Self {
        self.columns.insert(name.into(), value);
        self
    }
}

impl ColumnAccess for Record {
    fn column(&self, name: &str) -> Option<&ColumnValue> {
        self.columns.get(name)
    }

    fn set_column(&mut self, name: &str, value: ColumnValue) {
        self.columns.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_columns() {
        let mut record = Record::new()
            .with_column("price_cents", ColumnValue::Integer(1000))
            .with_column("currency", ColumnValue::Text("gbp".to_string()));

        assert_eq!(
            record.column("price_cents").and_then(ColumnValue::as_integer),
            Some(1000)
        );
        assert_eq!(record.column("missing"), None);

        record.set_column("price_cents", ColumnValue::Integer(500));
        assert_eq!(
            record.column("price_cents").and_then(ColumnValue::as_integer),
            Some(500)
        );
    }

    #[test]
    fn test_column_value_conversion() {
        let hint = Some(Currency::Usd);

        assert_eq!(
            ColumnValue::Integer(500).to_money(hint).unwrap(),
            Money::new(500, Currency::Usd)
        );
        assert_eq!(
            ColumnValue::Text("5.00".to_string()).to_money(hint).unwrap(),
            Money::new(500, Currency::Usd)
        );

        let err = ColumnValue::Boolean(true).to_money(hint).unwrap_err();
        assert_eq!(err.to_string(), "can't convert Boolean to Money");

        assert!(ColumnValue::Null.to_money(hint).is_err());
    }
}
