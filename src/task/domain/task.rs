//! Task aggregate root.

use super::{
    FieldUpdate, TaskChanges, TaskDomainError, TaskId, TaskStatus, TaskTitle, TaskVersion,
    changes::now,
};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    version: TaskVersion,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted revision counter.
    pub version: TaskVersion,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            version: data.version,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the revision counter.
    #[must_use]
    pub const fn version(&self) -> TaskVersion {
        self.version
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies validated changes to this task.
    ///
    /// Requesting the current status is treated as no change. The version is
    /// bumped and `updated_at` refreshed only when at least one field differs
    /// from its stored value. Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the requested
    /// status is not reachable from the current one. The task is left
    /// untouched in that case.
    pub fn apply(
        &mut self,
        changes: TaskChanges,
        clock: &impl Clock,
    ) -> Result<bool, TaskDomainError> {
        if let FieldUpdate::Set(target) = changes.status
            && target != self.status
            && !self.status.can_transition_to(target)
        {
            return Err(TaskDomainError::InvalidStateTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }

        let mut changed = false;
        changed |= replace_if_set(&mut self.title, changes.title);
        changed |= replace_if_set(&mut self.description, changes.description);
        changed |= replace_if_set(&mut self.status, changes.status);

        if changed {
            self.version = self.version.next();
            self.updated_at = now(clock);
        }
        Ok(changed)
    }
}

/// Overwrites `field` with a supplied value, returning whether it differed.
fn replace_if_set<T: PartialEq>(field: &mut T, update: FieldUpdate<T>) -> bool {
    match update {
        FieldUpdate::Set(value) if *field != value => {
            *field = value;
            true
        }
        FieldUpdate::Set(_) | FieldUpdate::Unchanged => false,
    }
}
