//! Domain model for task management.
//!
//! The task domain models the status state machine, validated titles, and
//! the aggregate that partial updates are applied to, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod changes;
mod error;
mod ids;
mod status;
mod task;
mod title;

pub use changes::{FieldUpdate, NewTask, TaskChanges, TaskDraft};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskVersion};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
pub use title::TaskTitle;
