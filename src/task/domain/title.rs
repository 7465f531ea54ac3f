//! Validated task title.

use super::TaskDomainError;
use serde::Serialize;
use std::fmt;

/// Non-empty, length-limited task title.
///
/// Surrounding whitespace is trimmed before the checks run, and the length
/// limit counts characters rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Default maximum number of characters in a title.
    pub const MAX_LENGTH: usize = 255;

    /// Creates a title limited to [`Self::MAX_LENGTH`] characters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for blank input and
    /// [`TaskDomainError::TitleTooLong`] when the trimmed title is longer than
    /// the limit.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        Self::with_max_length(value, Self::MAX_LENGTH)
    }

    /// Creates a title limited to `max` characters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for blank input and
    /// [`TaskDomainError::TitleTooLong`] when the trimmed title is longer than
    /// `max`.
    pub fn with_max_length(value: impl Into<String>, max: usize) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let actual = trimmed.chars().count();
        if actual > max {
            return Err(TaskDomainError::TitleTooLong { max, actual });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title, returning the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
