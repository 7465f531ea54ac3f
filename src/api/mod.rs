//! HTTP surface over the task service.
//!
//! Routes live under `/api`. Successful responses carry the task
//! representation from [`dto`]; failures carry a JSON `message` and, for
//! validation failures, an `errors` object keyed by field name.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use handlers::{AppState, DynTaskService};
pub use routes::{router, serve};
