//! Individual validation rules.
//!
//! Each rule is a pure function checking one field. Rules return the
//! normalized value on success or a single [`FieldViolation`] on failure;
//! collecting them is left to the validator.

use super::{FieldViolation, TaskField, ValidationConfig};
use crate::task::domain::{TaskDomainError, TaskStatus, TaskTitle};
use serde_json::Value;

/// Validates a proposed title.
///
/// `None` means the key was absent. Absent, `null`, and blank titles are all
/// reported as required.
///
/// # Errors
///
/// Returns [`FieldViolation::RequiredField`], [`FieldViolation::InvalidType`]
/// for non-string values, or [`FieldViolation::FieldTooLong`].
pub fn validate_title(
    value: Option<&Value>,
    config: &ValidationConfig,
) -> Result<TaskTitle, FieldViolation> {
    let field = TaskField::Title;
    let text = match value {
        None | Some(Value::Null) => return Err(FieldViolation::RequiredField { field }),
        Some(Value::String(text)) => text,
        Some(_) => {
            return Err(FieldViolation::InvalidType {
                field,
                expected: "string",
            });
        }
    };

    TaskTitle::with_max_length(text.as_str(), config.max_title_length).map_err(|err| match err {
        TaskDomainError::TitleTooLong { max, actual } => {
            FieldViolation::FieldTooLong { field, max, actual }
        }
        _ => FieldViolation::RequiredField { field },
    })
}

/// Validates a proposed description.
///
/// `null` and blank strings normalize to `None`; other strings are trimmed.
///
/// # Errors
///
/// Returns [`FieldViolation::InvalidType`] when the value is neither a
/// string nor `null`.
pub fn validate_description(value: &Value) -> Result<Option<String>, FieldViolation> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => {
            let trimmed = text.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
        }
        _ => Err(FieldViolation::InvalidType {
            field: TaskField::Description,
            expected: "string",
        }),
    }
}

/// Validates a proposed status literal.
///
/// Literals are matched exactly; no case folding or trimming is applied.
///
/// # Errors
///
/// Returns [`FieldViolation::InvalidEnum`] for any value that is not one of
/// the status literals, including non-strings.
pub fn validate_status(value: &Value) -> Result<TaskStatus, FieldViolation> {
    let invalid = |raw: String| FieldViolation::InvalidEnum {
        field: TaskField::Status,
        value: raw,
    };
    match value {
        Value::String(text) => {
            TaskStatus::try_from(text.as_str()).map_err(|_| invalid(text.clone()))
        }
        other => Err(invalid(other.to_string())),
    }
}

/// Validates a status change against the transition table.
///
/// Resubmitting the current status is a transition like any other and is
/// rejected here; policies that accept it must short-circuit beforehand.
///
/// # Errors
///
/// Returns [`FieldViolation::InvalidTransition`] when `requested` is not
/// reachable from `current`.
pub fn validate_transition(
    current: TaskStatus,
    requested: TaskStatus,
) -> Result<TaskStatus, FieldViolation> {
    if current.can_transition_to(requested) {
        Ok(requested)
    } else {
        Err(FieldViolation::InvalidTransition {
            from: current,
            to: requested,
        })
    }
}
