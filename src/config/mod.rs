//! Configuration for monetized field declarations.

use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Process-wide monetization settings
///
/// A declaration captures these at the moment it runs; changing the
/// configuration afterwards never affects already-declared fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonetizeConfig {
    /// Currency used when neither a field override nor a row currency applies
    pub default_currency: Currency,
    /// Whether declarations register a numericality rule on the subunit column
    pub include_validations: bool,
    /// Log a warning when deprecated option keys are used
    pub log_deprecations: bool,
}

impl Default for MonetizeConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::Usd,
            include_validations: true,
            log_deprecations: true,
        }
    }
}

impl MonetizeConfig {
    /// Create a configuration with the given default currency
    #[must_use]
    pub fn with_default_currency(currency: Currency) -> Self {
        Self {
            default_currency: currency,
            ..Self::default()
        }
    }
}
