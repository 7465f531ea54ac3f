//! When steps for task status transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use rstest_bdd_macros::when;
use tareas::task::validation::{TaskField, TaskFields};

fn submit_update(world: &mut TaskTransitionWorld, fields: &TaskFields) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let result = run_async(world.service.update(id, fields));
    if let Ok(ref updated) = result {
        world.current_task = Some(updated.clone());
    }
    world.last_update_result = Some(result);
    Ok(())
}

#[when(r#"the task is updated with status "{status}""#)]
fn update_status(world: &mut TaskTransitionWorld, status: String) -> Result<(), eyre::Report> {
    submit_update(world, &TaskFields::new().with(TaskField::Status, status))
}

#[when(r#"the task is updated with title "{title}" and status "{status}""#)]
fn update_title_and_status(
    world: &mut TaskTransitionWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    submit_update(
        world,
        &TaskFields::new()
            .with(TaskField::Title, title)
            .with(TaskField::Status, status),
    )
}
