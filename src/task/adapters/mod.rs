//! Persistence adapters for the task module.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskRepository`]: Thread-safe in-memory storage
//! - [`postgres::PostgresTaskRepository`]: `PostgreSQL` persistence using
//!   Diesel ORM

pub mod memory;
pub mod postgres;
