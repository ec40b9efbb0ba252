//! Resolved monetized field declarations.
//!
//! This is the configuration-resolution half of the monetization layer: a
//! raw options bag plus the subunit column name become a canonical
//! [`MonetizedField`], with deprecated-key fallback and default target-name
//! derivation applied.

use super::options::MonetizeOptions;
use crate::config::MonetizeConfig;
use crate::error::Result;
use crate::money::Currency;
use serde::Serialize;

/// Suffix convention for subunit column names
pub const SUBUNIT_SUFFIX: &str = "_cents";

/// Suffix appended when the subunit name follows no convention
pub const DEFAULT_TARGET_SUFFIX: &str = "_money";

/// A fully resolved monetized field declaration
#[derive(Debug, Clone, Serialize)]
pub struct MonetizedField {
    /// Physical column holding the integer subunit count
    pub subunit_name: String,
    /// Name of the derived money accessor
    pub target_name: String,
    /// Name of the optional row currency column
    pub model_currency_name: String,
    /// Fixed currency override; always wins over row and default currency
    pub field_currency: Option<Currency>,
    /// Whether a numericality rule was requested at declaration time
    pub validate_numericality: bool,
}

impl MonetizedField {
    /// Resolve a declaration from its subunit column name and options
    ///
    /// Legacy option keys are honored alongside the modern ones; their
    /// presence logs a warning but never changes the resolved result. A
    /// currency override that fails code lookup is a declaration bug and
    /// fails here, not at first access.
    pub fn resolve(
        subunit_name: &str,
        options: &MonetizeOptions,
        config: &MonetizeConfig,
    ) -> Result<Self> {
        if options.uses_deprecated_keys() && config.log_deprecations {
            log::warn!(
                "monetize declaration for `{subunit_name}` uses old option keys; \
                 use `target`, `with_currency` or `with_model_currency` instead"
            );
        }

        let model_currency_name = options
            .with_model_currency
            .clone()
            .or_else(|| options.model_currency.clone())
            .unwrap_or_else(|| "currency".to_string());

        let field_currency = options
            .with_currency
            .as_deref()
            .or(options.field_currency.as_deref())
            .map(Currency::from_code)
            .transpose()?;

        let target_name = options
            .target
            .clone()
            .or_else(|| options.target_name.clone())
            .unwrap_or_else(|| derive_target_name(subunit_name));

        Ok(Self {
            subunit_name: subunit_name.to_string(),
            target_name,
            model_currency_name,
            field_currency,
            validate_numericality: config.include_validations,
        })
    }
}

/// Derive an accessor name from a subunit column name
///
/// `price_cents` becomes `price`; a name without the `_cents` suffix gets
/// `_money` appended instead.
#[must_use]
pub fn derive_target_name(subunit_name: &str) -> String {
    subunit_name.strip_suffix(SUBUNIT_SUFFIX).map_or_else(
        || format!("{subunit_name}{DEFAULT_TARGET_SUFFIX}"),
        ToString::to_string,
    )
}
