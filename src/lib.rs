//! Tareas: a validated task tracking service.
//!
//! Tasks carry a title, an optional description, and a status that moves
//! forward through `pendiente`, `en progreso`, and `completada`. Every write
//! is validated first; rejected requests report each offending field.
//!
//! # Architecture
//!
//! Tareas follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, and lifecycle services
//! - [`api`]: HTTP surface over the task service
//! - [`config`]: Environment-driven runtime configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod task;
pub mod telemetry;
