//! Then steps for task creation BDD scenarios.

use super::world::{TaskCreationWorld, run_async};
use rstest_bdd_macros::then;
use tareas::task::{
    domain::{Task, TaskStatus},
    services::TaskServiceError,
    validation::ValidationError,
};

fn created_task(world: &TaskCreationWorld) -> Result<&Task, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(task)) => Ok(task),
        Some(Err(err)) => Err(eyre::eyre!("expected creation to succeed, got {err}")),
        None => Err(eyre::eyre!("missing creation result")),
    }
}

fn validation_error(world: &TaskCreationWorld) -> Result<&ValidationError, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(TaskServiceError::Validation(err))) => Ok(err),
        other => Err(eyre::eyre!("expected a validation failure, got {other:?}")),
    }
}

#[then(r#"the task is stored with status "{status}""#)]
fn task_stored_with_status(world: &TaskCreationWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = created_task(world)?;

    if task.status() != expected {
        return Err(eyre::eyre!("expected status {expected}, found {}", task.status()));
    }
    let stored = run_async(world.service.get(task.id()))?;
    if &stored != task {
        return Err(eyre::eyre!("stored task {stored:?} differs from {task:?}"));
    }
    Ok(())
}

#[then(r#"creation fails with an error for "{field}""#)]
fn creation_fails_for_field(world: &TaskCreationWorld, field: String) -> Result<(), eyre::Report> {
    let err = validation_error(world)?;
    if !err.field_messages().contains_key(field.as_str()) {
        return Err(eyre::eyre!("expected an error for {field}, got {err:?}"));
    }
    Ok(())
}

#[then(r#"creation fails with the message "{message}""#)]
fn creation_fails_with_message(
    world: &TaskCreationWorld,
    message: String,
) -> Result<(), eyre::Report> {
    let err = validation_error(world)?;
    if err.message() != message {
        return Err(eyre::eyre!("expected message {message:?}, got {:?}", err.message()));
    }
    Ok(())
}

#[then("no task is stored")]
fn no_task_is_stored(world: &TaskCreationWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list())?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no stored tasks, found {}", tasks.len()));
    }
    Ok(())
}
