//! Step definitions for task status transition scenarios.

pub mod given;
pub mod when;
pub mod world;
