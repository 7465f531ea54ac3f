//! Task validator.
//!
//! Combines the individual rules into create and update validation,
//! collecting every violation rather than stopping at the first.

use super::{FieldViolation, TaskField, TaskFields, ValidationConfig, ValidationError, rules};
use crate::task::domain::{FieldUpdate, TaskChanges, TaskDraft, TaskStatus};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates proposed task fields for creation and update.
///
/// The validator is stateless apart from its configuration and may be shared
/// freely between concurrent requests.
///
/// # Examples
///
/// ```
/// use tareas::task::domain::TaskStatus;
/// use tareas::task::validation::{TaskField, TaskFields, TaskValidator};
///
/// let validator = TaskValidator::new();
/// let draft = validator
///     .validate_create(&TaskFields::new().with(TaskField::Title, "Buy milk"))
///     .expect("valid task");
///
/// assert_eq!(draft.title.as_str(), "Buy milk");
/// assert_eq!(draft.status, TaskStatus::Pendiente);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskValidator {
    config: ValidationConfig,
}

impl TaskValidator {
    /// Creates a validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates the fields of a task about to be created.
    ///
    /// The status state machine is not consulted: a task may start in any
    /// status, defaulting to `pendiente`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every invalid field.
    pub fn validate_create(&self, fields: &TaskFields) -> ValidationResult<TaskDraft> {
        let mut violations = Vec::new();

        let title = collect(
            &mut violations,
            rules::validate_title(fields.get(TaskField::Title), &self.config),
        );
        let description = match fields.get(TaskField::Description) {
            None => Some(None),
            Some(value) => collect(&mut violations, rules::validate_description(value)),
        };
        let status = match fields.get(TaskField::Status) {
            None => Some(TaskStatus::default()),
            Some(value) => collect(&mut violations, rules::validate_status(value)),
        };

        let (Some(title), Some(description), Some(status)) = (title, description, status) else {
            return Err(ValidationError::new(violations));
        };
        Ok(TaskDraft {
            title,
            description,
            status,
        })
    }

    /// Validates a partial update of a task currently in `current_status`.
    ///
    /// Only supplied fields are checked. A supplied status must be a
    /// permitted transition from `current_status`. Any violation rejects
    /// the whole update.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every invalid field.
    pub fn validate_update(
        &self,
        fields: &TaskFields,
        current_status: TaskStatus,
    ) -> ValidationResult<TaskChanges> {
        let mut violations = Vec::new();
        let mut changes = TaskChanges::default();

        if let Some(value) = fields.get(TaskField::Title) {
            changes.title = collect_update(
                &mut violations,
                rules::validate_title(Some(value), &self.config),
            );
        }

        if let Some(value) = fields.get(TaskField::Description) {
            changes.description =
                collect_update(&mut violations, rules::validate_description(value));
        }

        if let Some(value) = fields.get(TaskField::Status) {
            changes.status = match rules::validate_status(value) {
                Ok(requested)
                    if requested == current_status && self.config.allow_status_resubmission =>
                {
                    FieldUpdate::Unchanged
                }
                Ok(requested) => collect_update(
                    &mut violations,
                    rules::validate_transition(current_status, requested),
                ),
                Err(violation) => {
                    violations.push(violation);
                    FieldUpdate::Unchanged
                }
            };
        }

        if violations.is_empty() {
            Ok(changes)
        } else {
            Err(ValidationError::new(violations))
        }
    }
}

/// Records a failed rule, returning the value of a successful one.
fn collect<T>(violations: &mut Vec<FieldViolation>, result: Result<T, FieldViolation>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}

fn collect_update<T>(
    violations: &mut Vec<FieldViolation>,
    result: Result<T, FieldViolation>,
) -> FieldUpdate<T> {
    collect(violations, result).map_or(FieldUpdate::Unchanged, FieldUpdate::Set)
}
