//! Given steps for task creation BDD scenarios.

use super::world::TaskCreationWorld;
use rstest_bdd_macros::given;
use tareas::task::validation::{TaskField, TaskFields};

#[given(r#"a task request titled "{title}""#)]
fn request_titled(world: &mut TaskCreationWorld, title: String) {
    world.pending_fields = TaskFields::new().with(TaskField::Title, title);
}

#[given("a task request with an empty title")]
fn request_with_empty_title(world: &mut TaskCreationWorld) {
    world.pending_fields = TaskFields::new().with(TaskField::Title, "");
}

#[given("a task request with a title of {length:usize} characters")]
fn request_with_title_length(world: &mut TaskCreationWorld, length: usize) {
    world.pending_fields = TaskFields::new().with(TaskField::Title, "x".repeat(length));
}

#[given(r#"the request asks for status "{status}""#)]
fn request_asks_for_status(world: &mut TaskCreationWorld, status: String) {
    world.pending_fields = world
        .pending_fields
        .clone()
        .with(TaskField::Status, status);
}
