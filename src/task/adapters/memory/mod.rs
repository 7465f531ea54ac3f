//! In-memory adapter implementations.
//!
//! Thread-safe storage without database dependencies, used by tests and by
//! the server when no database URL is configured.

mod task;

pub use task::InMemoryTaskRepository;
