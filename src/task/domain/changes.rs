//! Validated inputs flowing into task creation and partial updates.

use super::{TaskStatus, TaskTitle};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;

/// Presence-aware value for a partial update.
///
/// `Unchanged` leaves the stored value alone. `Set(None)` on an optional
/// field clears it, which is distinct from omitting the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// The field was not supplied.
    #[default]
    Unchanged,
    /// The field was supplied with this value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Returns `true` when the field was not supplied.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Returns the supplied value, if any.
    #[must_use]
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Unchanged => None,
            Self::Set(value) => Some(value),
        }
    }
}

/// Normalized field set accepted for task creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Validated title.
    pub title: TaskTitle,
    /// Optional description; blank input is normalized to `None`.
    pub description: Option<String>,
    /// Initial status, `pendiente` unless supplied.
    pub status: TaskStatus,
}

impl TaskDraft {
    /// Creates a draft with no description in the default status.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
            status: TaskStatus::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Normalized subset of fields accepted for a task update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: FieldUpdate<TaskTitle>,
    /// Replacement description; `Set(None)` clears it.
    pub description: FieldUpdate<Option<String>>,
    /// Requested status.
    pub status: FieldUpdate<TaskStatus>,
}

impl TaskChanges {
    /// Returns `true` when no field was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_unchanged() && self.description.is_unchanged() && self.status.is_unchanged()
    }
}

/// A validated draft stamped with its creation time, awaiting an identifier
/// from the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    draft: TaskDraft,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Stamps a draft with the current clock time.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        Self {
            draft,
            created_at: now(clock),
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.draft.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.draft.description.as_deref()
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.draft.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Reads the clock at the microsecond precision `PostgreSQL` stores.
pub(crate) fn now(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(6)
}
