//! Shared world state for task status transition BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tareas::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task transition behaviour tests.
pub struct TaskTransitionWorld {
    pub service: TestTaskService,
    pub current_task: Option<Task>,
    pub last_update_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskTransitionWorld {
    /// Creates a world with an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskService::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(DefaultClock),
            ),
            current_task: None,
            last_update_result: None,
        }
    }

    /// Returns the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskTransitionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskTransitionWorld {
    TaskTransitionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
