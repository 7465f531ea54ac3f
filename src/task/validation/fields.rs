//! Raw, untyped field input for task creation and update.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Task fields accepted from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    /// The `title` field.
    Title,
    /// The `description` field.
    Description,
    /// The `status` field.
    Status,
}

impl TaskField {
    /// Returns the field name as it appears in request bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proposed field values, exactly as received.
///
/// Presence matters: an absent key and a key holding `null` are different
/// inputs. Keys other than the known [`TaskField`]s are carried but never
/// read.
///
/// # Examples
///
/// ```
/// use tareas::task::validation::{TaskField, TaskFields};
/// use serde_json::Value;
///
/// let fields = TaskFields::new()
///     .with(TaskField::Title, "Buy milk")
///     .with(TaskField::Description, Value::Null);
///
/// assert!(fields.get(TaskField::Description).is_some_and(Value::is_null));
/// assert!(fields.get(TaskField::Status).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskFields(Map<String, Value>);

impl TaskFields {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field value.
    #[must_use]
    pub fn with(mut self, field: TaskField, value: impl Into<Value>) -> Self {
        self.0.insert(field.as_str().to_owned(), value.into());
        self
    }

    /// Returns the supplied value for `field`, or `None` when absent.
    #[must_use]
    pub fn get(&self, field: TaskField) -> Option<&Value> {
        self.0.get(field.as_str())
    }
}

impl From<Map<String, Value>> for TaskFields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
