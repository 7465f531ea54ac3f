//! Task management for Tareas.
//!
//! This module owns the task record, its three-state status machine, and the
//! validation gate that every create and update request passes through before
//! anything is stored. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Input validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
