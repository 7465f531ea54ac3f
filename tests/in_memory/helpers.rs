//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tareas::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, TaskDraft, TaskTitle},
    services::TaskService,
};

/// Service type used across in-memory tests.
pub type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a service over a fresh repository.
#[fixture]
pub fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Builds a timestamped new task with the given title.
///
/// # Errors
///
/// Returns an error if `title` is not a valid task title.
pub fn new_task(title: &str) -> eyre::Result<NewTask> {
    Ok(NewTask::new(
        TaskDraft::new(TaskTitle::new(title)?),
        &DefaultClock,
    ))
}
