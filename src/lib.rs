//! A Rust library for presenting integer subunit record columns as
//! currency-aware money values, with per-row currency scoping, declarative
//! configuration and numericality validation.
//!
//! A record type declares a monetized field once, at type-definition time:
//! the subunit column (e.g. `price_cents`) gains a derived accessor
//! (`price`) that composes a [`Money`] on every read and decomposes
//! assigned values back into the backing column(s) on every write. Currency
//! resolution follows a fixed precedence: declaration override, then the
//! row's currency column, then the configured default.

pub mod config;
pub mod error;
pub mod money;
pub mod record;
pub mod schema;
pub mod validate;

// Re-export the most common types for easier use
// Core types
pub use config::MonetizeConfig;
pub use error::{MonetizeError, Result};
pub use money::{Currency, Money, ToMoney};
pub use record::{ColumnAccess, ColumnValue, Record};
pub use schema::{MonetizeOptions, MonetizedField, MoneyAccessor, RecordSchema};
pub use validate::{NumericalityRule, ValidationIssue, ValidationReport};
