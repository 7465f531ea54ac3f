//! Service round trips over the in-memory repository.

use std::sync::Arc;

use super::helpers::{TestService, service};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::rstest;
use tareas::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskStatus,
    services::{TaskService, TaskServiceError},
    validation::{TaskField, TaskFields},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_and_updated_tasks_read_back_equal(service: TestService) -> eyre::Result<()> {
    let created = service
        .create(&TaskFields::new().with(TaskField::Title, "Buy milk"))
        .await?;
    ensure!(service.get(created.id()).await? == created);

    let updated = service
        .update(
            created.id(),
            &TaskFields::new()
                .with(TaskField::Title, "  Buy oat milk ")
                .with(TaskField::Status, "en progreso"),
        )
        .await?;

    ensure!(updated.title().as_str() == "Buy oat milk");
    ensure!(updated.status() == TaskStatus::EnProgreso);
    ensure!(updated.version() == created.version().next());
    ensure!(service.get(created.id()).await? == updated);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_accepts_no_status(service: TestService) -> eyre::Result<()> {
    let task = service
        .create(
            &TaskFields::new()
                .with(TaskField::Title, "Done already")
                .with(TaskField::Status, "completada"),
        )
        .await?;

    for literal in ["pendiente", "en progreso", "completada"] {
        let result = service
            .update(task.id(), &TaskFields::new().with(TaskField::Status, literal))
            .await;
        let Err(TaskServiceError::Validation(err)) = result else {
            bail!("expected {literal} to be refused, got {result:?}");
        };
        ensure!(err.has_field(TaskField::Status));
    }
    ensure!(service.get(task.id()).await? == task);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn racing_updates_store_exactly_one() -> eyre::Result<()> {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let service: TestService = TaskService::new(repository, Arc::new(DefaultClock));
    let task = service
        .create(&TaskFields::new().with(TaskField::Title, "Contested"))
        .await?;

    let handles: Vec<_> = ["en progreso", "completada", "en progreso", "completada"]
        .into_iter()
        .map(|literal| {
            let racer = service.clone();
            let id = task.id();
            tokio::spawn(async move {
                racer
                    .update(id, &TaskFields::new().with(TaskField::Status, literal))
                    .await
            })
        })
        .collect();

    let mut stored_versions = Vec::new();
    for handle in handles {
        match handle.await? {
            Ok(updated) => stored_versions.push(updated.version()),
            Err(TaskServiceError::Conflict(_) | TaskServiceError::Validation(_)) => {}
            Err(other) => bail!("unexpected failure: {other}"),
        }
    }

    let stored = service.get(task.id()).await?;
    ensure!(!stored_versions.is_empty());
    ensure!(stored_versions.contains(&stored.version()));
    ensure!(stored.version().value() <= 3, "at most two forward steps exist");
    Ok(())
}
