//! Error handling for monetized field declaration and access.

/// Specialized error type for monetized fields
#[derive(Debug, thiserror::Error)]
pub enum MonetizeError {
    /// A value assigned to a monetized accessor has no conversion to Money
    #[error("can't convert {kind} to Money")]
    UnconvertibleValue {
        /// What was assigned, by type or variant name
        kind: String,
    },

    /// A currency code failed lookup
    #[error("unknown currency code: {0:?}")]
    UnknownCurrency(String),

    /// A conversion had no currency of its own and no hint to fall back to
    #[error("no currency available: value carries none and no override or row currency applies")]
    NoCurrency,

    /// A major-unit amount does not fit the subunit range
    #[error("amount out of range for a subunit count: {0}")]
    AmountOutOfRange(String),

    /// A derived money field was requested that the schema never declared
    #[error("schema `{schema}` has no monetized field `{target}`")]
    UnknownAccessor {
        /// Schema name
        schema: String,
        /// Requested accessor name
        target: String,
    },

    /// The subunit backing column holds something other than an integer
    #[error("column `{column}` holds {found}, expected an integer subunit count")]
    NonNumericSubunits {
        /// Backing column name
        column: String,
        /// Variant name of the value found
        found: &'static str,
    },
}

/// Result type for monetize operations
pub type Result<T> = std::result::Result<T, MonetizeError>;
