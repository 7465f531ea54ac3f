//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The task identifier text is not an integer.
    #[error("malformed task identifier '{0}'")]
    MalformedTaskId(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured character limit.
    #[error("task title has {actual} characters, exceeds limit of {max}")]
    TitleTooLong {
        /// Maximum permitted number of characters.
        max: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The requested status change is not permitted by the state machine.
    #[error("task {task_id} cannot transition from {from} to {to}")]
    InvalidStateTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Status held when the transition was requested.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },
}

/// Error returned while parsing task statuses from wire or storage values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
