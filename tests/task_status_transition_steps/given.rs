//! Given steps for task status transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tareas::task::validation::{TaskField, TaskFields};

#[given(r#"a task titled "{title}" with status "{status}""#)]
fn task_with_status(
    world: &mut TaskTransitionWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let fields = TaskFields::new()
        .with(TaskField::Title, title)
        .with(TaskField::Status, status);
    let created = run_async(world.service.create(&fields))
        .wrap_err("create task for transition scenario")?;
    world.current_task = Some(created);
    Ok(())
}
