//! Record validation rules registered by monetize declarations.
//!
//! Rules are purely additive: once a declaration registers one it stays on
//! the schema for the lifetime of the type. Evaluation happens only when a
//! caller explicitly validates a record, never at assignment time.

use crate::record::{ColumnAccess, ColumnValue};
use itertools::Itertools;
use serde::Serialize;

/// A numericality constraint on a physical column
///
/// Standard numericality: integers and floats pass, text passes when it
/// parses as a number, everything else (including a missing or null value)
/// is an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumericalityRule {
    /// The column the rule applies to
    pub column: String,
}

impl NumericalityRule {
    /// Create a rule for the given column
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    /// Check one record, returning the issue when the column fails
    #[must_use]
    pub fn check(&self, record: &dyn ColumnAccess) -> Option<ValidationIssue> {
        let numeric = match record.column(&self.column) {
            Some(ColumnValue::Integer(_) | ColumnValue::Float(_)) => true,
            Some(ColumnValue::Text(s)) => s.trim().parse::<f64>().is_ok(),
            Some(ColumnValue::Boolean(_) | ColumnValue::Null) | None => false,
        };

        if numeric {
            None
        } else {
            Some(ValidationIssue {
                column: self.column.clone(),
                message: "is not a number".to_string(),
            })
        }
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// The column that failed
    pub column: String,
    /// Description of the failure
    pub message: String,
}

/// The outcome of validating one record against its schema rules
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Every issue found, in rule order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Whether the record passed every rule
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// One-line summary of all issues
    #[must_use]
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|issue| format!("{} {}", issue.column, issue.message))
            .join(", ")
    }
}
