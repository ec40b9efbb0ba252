//! Options bag accepted by a monetize declaration.

use serde::{Deserialize, Serialize};

/// Options for a single monetize declaration
///
/// Modern keys are `target` (the `as` option), `with_currency` and
/// `with_model_currency`. The legacy keys `target_name`, `field_currency`
/// and `model_currency` are still honored but log a deprecation warning at
/// declaration time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonetizeOptions {
    /// Explicit derived accessor name (the `as` option)
    pub target: Option<String>,
    /// Fixed currency override for this field
    pub with_currency: Option<String>,
    /// Name of the row currency column
    pub with_model_currency: Option<String>,

    /// Deprecated alias for `target`
    pub target_name: Option<String>,
    /// Deprecated alias for `with_currency`
    pub field_currency: Option<String>,
    /// Deprecated alias for `with_model_currency`
    pub model_currency: Option<String>,
}

impl MonetizeOptions {
    /// Empty options: every name and currency is derived or defaulted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the derived accessor name
    #[must_use]
    pub fn as_target(mut self, name: impl Into<String>) -> Self {
        self.target = Some(name.into());
        self
    }

    /// Set the fixed currency override
    #[must_use]
    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.with_currency = Some(code.into());
        self
    }

    /// Set the row currency column name
    #[must_use]
    pub fn with_model_currency(mut self, column: impl Into<String>) -> Self {
        self.with_model_currency = Some(column.into());
        self
    }

    /// Whether any deprecated key is present
    #[must_use]
    pub const fn uses_deprecated_keys(&self) -> bool {
        self.target_name.is_some() || self.field_currency.is_some() || self.model_currency.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_modern_keys() {
        let options = MonetizeOptions::new()
            .as_target("cost")
            .with_currency("eur")
            .with_model_currency("iso_code");

        assert_eq!(options.target.as_deref(), Some("cost"));
        assert_eq!(options.with_currency.as_deref(), Some("eur"));
        assert_eq!(options.with_model_currency.as_deref(), Some("iso_code"));
        assert!(!options.uses_deprecated_keys());
    }

    #[test]
    fn test_deprecated_key_detection() {
        let options = MonetizeOptions {
            field_currency: Some("usd".to_string()),
            ..MonetizeOptions::default()
        };

        assert!(options.uses_deprecated_keys());
    }
}
