//! When steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use taskdeck::task::domain::StatusFilter;

#[when("the task is created")]
fn create_pending_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;

    let result = run_async(world.service.create_task(request));
    if let Ok(task) = &result {
        world.last_created_id = Some(task.id());
    }
    world.last_create_result = Some(result);
    Ok(())
}

#[when("the task's completion is toggled")]
fn toggle_task_completion(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_created_id
        .ok_or_else(|| eyre::eyre!("missing created task id in scenario world"))?;
    let toggled = run_async(world.service.toggle_task_completion(id))
        .map_err(|err| eyre::eyre!("toggle failed: {err}"))?;
    if !toggled {
        return Err(eyre::eyre!("expected toggle to find the task"));
    }
    Ok(())
}

#[when(r#"tasks are listed with status "{status}""#)]
fn list_tasks_with_status(world: &mut TaskWorld, status: String) -> Result<(), eyre::Report> {
    let filter = StatusFilter::from_query(&status);
    let listing = run_async(world.service.get_all_tasks(filter, None))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    world.last_listing = Some(listing);
    Ok(())
}
