//! Task status and the transition table that governs it.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
///
/// The serialized forms are wire literals and must not change: note the
/// embedded space in `"en progreso"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started. Initial status of every task created without
    /// an explicit status.
    #[default]
    #[serde(rename = "pendiente")]
    Pendiente,
    /// Work is under way.
    #[serde(rename = "en progreso")]
    EnProgreso,
    /// Work is finished. Terminal.
    #[serde(rename = "completada")]
    Completada,
}

/// Permitted next statuses, keyed by current status.
static TRANSITIONS: [(TaskStatus, &[TaskStatus]); 3] = [
    (
        TaskStatus::Pendiente,
        &[TaskStatus::EnProgreso, TaskStatus::Completada],
    ),
    (TaskStatus::EnProgreso, &[TaskStatus::Completada]),
    (TaskStatus::Completada, &[]),
];

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pendiente, Self::EnProgreso, Self::Completada];

    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::EnProgreso => "en progreso",
            Self::Completada => "completada",
        }
    }

    /// Returns the statuses reachable from this one in a single update.
    ///
    /// A status never lists itself.
    #[must_use]
    pub fn allowed_transitions(self) -> &'static [Self] {
        TRANSITIONS
            .iter()
            .find_map(|(from, targets)| (*from == self).then_some(*targets))
            .unwrap_or_default()
    }

    /// Returns `true` when moving to `target` is permitted.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Returns `true` when no transition leaves this status.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}
