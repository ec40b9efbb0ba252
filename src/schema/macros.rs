//! Declaration macro for monetized fields.
//!
//! `monetize!` mirrors the keyword-option call surface of the declaration:
//! the subunit column name plus any of `as`, `with_currency` and
//! `with_model_currency` (or their deprecated aliases `target_name`,
//! `field_currency` and `model_currency`).
//!
//! # Example
//!
//! ```rust
//! use monetize::{monetize, MonetizeConfig, RecordSchema};
//!
//! let config = MonetizeConfig::default();
//! let mut schema = RecordSchema::new("Product", ["id", "price_cents", "currency"]);
//!
//! monetize!(schema, &config, "price_cents").unwrap();
//! monetize!(schema, &config, "price_cents", as: "cost", with_currency: "eur").unwrap();
//! ```

/// Declare a monetized field on a schema with keyword-style options
#[macro_export]
macro_rules! monetize {
    (@option $options:ident, as: $value:expr) => {
        $options.target = Some($value.to_string());
    };
    (@option $options:ident, with_currency: $value:expr) => {
        $options.with_currency = Some($value.to_string());
    };
    (@option $options:ident, with_model_currency: $value:expr) => {
        $options.with_model_currency = Some($value.to_string());
    };
    (@option $options:ident, target_name: $value:expr) => {
        $options.target_name = Some($value.to_string());
    };
    (@option $options:ident, field_currency: $value:expr) => {
        $options.field_currency = Some($value.to_string());
    };
    (@option $options:ident, model_currency: $value:expr) => {
        $options.model_currency = Some($value.to_string());
    };
    ($schema:expr, $config:expr, $subunit:expr $(, $key:tt : $value:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut options = $crate::schema::MonetizeOptions::new();
        $( $crate::monetize!(@option options, $key: $value); )*
        $schema.monetize($subunit, options, $config)
    }};
}
