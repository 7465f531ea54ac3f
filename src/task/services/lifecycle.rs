//! Service layer for task creation, lookup, update, and deletion.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
    validation::{TaskFields, TaskValidator, ValidationError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Proposed field values were rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task changed between being read and being written.
    #[error("task {0} was modified concurrently")]
    Conflict(TaskId),

    /// A domain invariant refused the change.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::VersionConflict { task_id, .. } => Self::Conflict(task_id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service: validates input, then persists it.
pub struct TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    validator: TaskValidator,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            validator: self.validator.clone(),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service with the default validator.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            validator: TaskValidator::new(),
        }
    }

    /// Replaces the validator.
    #[must_use]
    pub fn with_validator(mut self, validator: TaskValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Returns the validator in use.
    #[must_use]
    pub const fn validator(&self) -> &TaskValidator {
        &self.validator
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the fields are rejected
    /// or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(&self, fields: &TaskFields) -> TaskServiceResult<Task> {
        let draft = self.validator.validate_create(fields)?;
        let new_task = NewTask::new(draft, &*self.clock);
        let task = self.repository.insert(&new_task).await?;
        info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Repository`] when lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Lists every task ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Validates and applies a partial update.
    ///
    /// The update is checked against the status read from the repository and
    /// written only if no other update landed in between. Nothing is written
    /// when the supplied values match what is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`], [`TaskServiceError::Validation`]
    /// (the whole update is rejected), [`TaskServiceError::Conflict`] on a
    /// concurrent modification, or [`TaskServiceError::Repository`].
    pub async fn update(&self, id: TaskId, fields: &TaskFields) -> TaskServiceResult<Task> {
        let mut task = self.get(id).await?;
        let changes = self.validator.validate_update(fields, task.status())?;
        let expected_version = task.version();

        if !task.apply(changes, &*self.clock)? {
            debug!(task_id = %id, "update left task unchanged");
            return Ok(task);
        }

        self.repository
            .update(&task, expected_version)
            .await
            .inspect_err(|err| {
                if let TaskRepositoryError::VersionConflict { .. } = err {
                    warn!(task_id = %id, error = %err, "concurrent task update refused");
                }
            })?;
        info!(task_id = %id, status = %task.status(), version = %task.version(), "task updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Repository`] when deletion fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.repository.delete(id).await? {
            return Err(TaskServiceError::NotFound(id));
        }
        info!(task_id = %id, "task deleted");
        Ok(())
    }
}
