//! Task field validation.
//!
//! Turns untyped [`TaskFields`] into a [`TaskDraft`](crate::task::domain::TaskDraft)
//! for creation or [`TaskChanges`](crate::task::domain::TaskChanges) for an
//! update, enforcing the status state machine on updates. Validation is pure:
//! no I/O and no shared state.

pub mod config;
pub mod error;
pub mod fields;
pub mod rules;
pub mod service;

pub use config::ValidationConfig;
pub use error::{FieldViolation, ValidationError};
pub use fields::{TaskField, TaskFields};
pub use service::{TaskValidator, ValidationResult};
