//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskId, TaskVersion};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// Identifiers are positive and increase with every insert. The stored
    /// task starts at [`TaskVersion::INITIAL`] with `updated_at` equal to
    /// `created_at`.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task ordered by ascending identifier.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Persists an updated task if its stored version still equals
    /// `expected_version`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task no longer
    /// exists or [`TaskRepositoryError::VersionConflict`] when another writer
    /// stored a different version first.
    async fn update(
        &self,
        task: &Task,
        expected_version: TaskVersion,
    ) -> TaskRepositoryResult<()>;

    /// Deletes a task.
    ///
    /// Returns `true` when a task was removed and `false` when none existed.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The stored version differs from the version the caller read.
    #[error("task {task_id} is at version {actual}, expected {expected}")]
    VersionConflict {
        /// Task whose update was refused.
        task_id: TaskId,
        /// Version the caller read before updating.
        expected: TaskVersion,
        /// Version currently stored.
        actual: TaskVersion,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
