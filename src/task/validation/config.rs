//! Configuration for task validation rules.

use crate::task::domain::TaskTitle;

/// Tunable limits and policies for [`TaskValidator`](super::TaskValidator).
///
/// # Examples
///
/// ```
/// use tareas::task::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_title_length, 255);
/// assert!(!config.allow_status_resubmission);
///
/// let lenient = ValidationConfig::lenient();
/// assert!(lenient.allow_status_resubmission);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum title length in characters.
    pub max_title_length: usize,
    /// Whether an update may resubmit the task's current status. When
    /// allowed, the resubmitted status is dropped from the change set;
    /// otherwise it is rejected as an invalid transition.
    pub allow_status_resubmission: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: TaskTitle::MAX_LENGTH,
            allow_status_resubmission: false,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that treats status resubmission as a no-op.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            allow_status_resubmission: true,
            ..Self::default()
        }
    }
}
