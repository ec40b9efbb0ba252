//! The monetization schema layer.
//!
//! This is where declarative monetize calls become derived money fields:
//! [`options`] and [`field`] resolve the declaration, [`accessor`] builds
//! the compose/decompose closure pair, and [`registry`] attaches both to the
//! record type's schema.

pub mod accessor;
pub mod field;
mod macros;
pub mod options;
pub mod registry;

pub use accessor::MoneyAccessor;
pub use field::{DEFAULT_TARGET_SUFFIX, MonetizedField, SUBUNIT_SUFFIX, derive_target_name};
pub use options::MonetizeOptions;
pub use registry::RecordSchema;

// Re-export the macro to make it available alongside the schema types
pub use crate::monetize;
