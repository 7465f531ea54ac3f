//! Wire representations of tasks.

use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task as returned by every endpoint that yields one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Description, or `null`.
    pub description: Option<String>,
    /// Status wire literal.
    pub status: TaskStatus,
    /// Creation time, RFC 3339.
    pub created_at: DateTime<Utc>,
    /// Latest modification time, RFC 3339.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
}

impl HealthResponse {
    /// Returns the healthy response.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
        }
    }
}
