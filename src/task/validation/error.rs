//! Validation error types.
//!
//! A [`ValidationError`] carries every [`FieldViolation`] found in one pass
//! so callers can report all problems at once.

use super::TaskField;
use crate::task::domain::TaskStatus;
use std::collections::BTreeMap;
use thiserror::Error;

/// A single problem with one proposed field value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldViolation {
    /// A mandatory field is missing or empty.
    #[error("The {field} field is required.")]
    RequiredField {
        /// Offending field.
        field: TaskField,
    },

    /// A string field exceeds its maximum length.
    #[error("The {field} field must not be greater than {max} characters.")]
    FieldTooLong {
        /// Offending field.
        field: TaskField,
        /// Maximum permitted number of characters.
        max: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// A field's value is not of the expected kind.
    #[error("The {field} field must be a {expected}.")]
    InvalidType {
        /// Offending field.
        field: TaskField,
        /// Name of the expected kind.
        expected: &'static str,
    },

    /// A field's value is not one of its permitted literals.
    #[error("The selected {field} is invalid.")]
    InvalidEnum {
        /// Offending field.
        field: TaskField,
        /// Rejected value as received.
        value: String,
    },

    /// A requested status change is not permitted from the current status.
    #[error("The status cannot change from {from} to {to}.")]
    InvalidTransition {
        /// Status held before the update.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },
}

impl FieldViolation {
    /// Returns the field the violation is attached to.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        match self {
            Self::RequiredField { field }
            | Self::FieldTooLong { field, .. }
            | Self::InvalidType { field, .. }
            | Self::InvalidEnum { field, .. } => *field,
            Self::InvalidTransition { .. } => TaskField::Status,
        }
    }
}

/// Rejection of a proposed field set, listing every violation found.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", summarize(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Creates a validation error from the collected violations.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `violations` is empty, as this indicates a
    /// logic error in the caller.
    #[must_use]
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        debug_assert!(
            !violations.is_empty(),
            "ValidationError::new called without violations"
        );
        Self { violations }
    }

    /// Returns every violation in detection order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns the violations attached to `field`.
    pub fn for_field(&self, field: TaskField) -> impl Iterator<Item = &FieldViolation> {
        self.violations
            .iter()
            .filter(move |violation| violation.field() == field)
    }

    /// Returns `true` when at least one violation is attached to `field`.
    #[must_use]
    pub fn has_field(&self, field: TaskField) -> bool {
        self.for_field(field).next().is_some()
    }

    /// Returns a one-line summary: the first message, followed by a count
    /// of the remaining ones.
    #[must_use]
    pub fn message(&self) -> String {
        summarize(&self.violations)
    }

    /// Groups human-readable messages by field name.
    #[must_use]
    pub fn field_messages(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut grouped: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for violation in &self.violations {
            grouped
                .entry(violation.field().as_str())
                .or_default()
                .push(violation.to_string());
        }
        grouped
    }
}

impl From<FieldViolation> for ValidationError {
    fn from(violation: FieldViolation) -> Self {
        Self::new(vec![violation])
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    let Some(first) = violations.first() else {
        return "The given data was invalid.".to_owned();
    };
    match violations.len().saturating_sub(1) {
        0 => first.to_string(),
        1 => format!("{first} (and 1 more error)"),
        remaining => format!("{first} (and {remaining} more errors)"),
    }
}
