//! When steps for task creation BDD scenarios.

use super::world::{TaskCreationWorld, run_async};
use rstest_bdd_macros::when;

#[when("the task is created")]
fn task_is_created(world: &mut TaskCreationWorld) {
    let result = run_async(world.service.create(&world.pending_fields));
    world.last_result = Some(result);
}
