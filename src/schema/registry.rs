//! Record schemas and monetized field registration.
//!
//! A [`RecordSchema`] owns the physical attribute list of one record type
//! plus everything monetization registers on it: derived money accessors and
//! numericality rules. Declarations run once, at type-definition time.

use super::accessor::MoneyAccessor;
use super::field::MonetizedField;
use super::options::MonetizeOptions;
use crate::config::MonetizeConfig;
use crate::error::{MonetizeError, Result};
use crate::money::{Money, ToMoney};
use crate::record::ColumnAccess;
use crate::validate::{NumericalityRule, ValidationReport};

/// The schema of one record type
#[derive(Clone)]
pub struct RecordSchema {
    /// The record type name
    pub name: String,
    attributes: Vec<String>,
    accessors: Vec<MoneyAccessor>,
    validations: Vec<NumericalityRule>,
}

impl RecordSchema {
    /// Create a schema from the record type's physical attribute names
    pub fn new(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
            accessors: Vec::new(),
            validations: Vec::new(),
        }
    }

    /// Whether the record type has a physical attribute with this name
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

    /// Declare a monetized field on this schema
    ///
    /// Resolves the options, builds the compose/decompose accessor according
    /// to whether the currency column exists, registers it under its target
    /// name (re-declaring a target overwrites the prior accessor) and, when
    /// the configuration asks for it, registers a numericality rule on the
    /// subunit column.
    pub fn monetize(
        &mut self,
        subunit_name: &str,
        options: MonetizeOptions,
        config: &MonetizeConfig,
    ) -> Result<&MoneyAccessor> {
        let field = MonetizedField::resolve(subunit_name, &options, config)?;

        let has_currency_column = self.has_attribute(&field.model_currency_name);
        let accessor = MoneyAccessor::build(field, has_currency_column, config.default_currency);

        log::debug!(
            "schema `{}`: monetized `{}` as `{}` backed by {:?}",
            self.name,
            subunit_name,
            accessor.field.target_name,
            accessor.backing_columns()
        );

        if accessor.field.validate_numericality {
            let rule = NumericalityRule::new(subunit_name);
            if !self.validations.contains(&rule) {
                self.validations.push(rule);
            }
        }

        let position = self
            .accessors
            .iter()
            .position(|a| a.field.target_name == accessor.field.target_name);
        let index = match position {
            Some(index) => {
                self.accessors[index] = accessor;
                index
            }
            None => {
                self.accessors.push(accessor);
                self.accessors.len() - 1
            }
        };

        Ok(&self.accessors[index])
    }

    /// Get a derived money accessor by target name
    #[must_use]
    pub fn accessor(&self, target: &str) -> Option<&MoneyAccessor> {
        self.accessors.iter().find(|a| a.field.target_name == target)
    }

    /// All derived money accessors, in declaration order
    #[must_use]
    pub fn accessors(&self) -> &[MoneyAccessor] {
        &self.accessors
    }

    /// The numericality rules registered by declarations
    #[must_use]
    pub fn validations(&self) -> &[NumericalityRule] {
        &self.validations
    }

    /// Read the derived money value named `target` from a record
    pub fn read_money(&self, record: &dyn ColumnAccess, target: &str) -> Result<Money> {
        self.require_accessor(target)?.read(record)
    }

    /// Assign a value to the derived money field named `target`
    pub fn write_money(
        &self,
        record: &mut dyn ColumnAccess,
        target: &str,
        value: &(impl ToMoney + ?Sized),
    ) -> Result<Money> {
        self.require_accessor(target)?.write(record, &value)
    }

    /// Evaluate the registered validation rules against one record
    #[must_use]
    pub fn validate(&self, record: &dyn ColumnAccess) -> ValidationReport {
        let issues = self
            .validations
            .iter()
            .filter_map(|rule| rule.check(record))
            .collect();

        ValidationReport { issues }
    }

    fn require_accessor(&self, target: &str) -> Result<&MoneyAccessor> {
        self.accessor(target)
            .ok_or_else(|| MonetizeError::UnknownAccessor {
                schema: self.name.clone(),
                target: target.to_string(),
            })
    }
}
