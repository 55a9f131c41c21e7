//! Then steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::then;
use taskdeck::task::{domain::TaskDomainError, services::TaskServiceError};

#[then("the task is stored with a completion timestamp")]
fn task_stored_completed(world: &TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_created_id
        .ok_or_else(|| eyre::eyre!("missing created task id in scenario world"))?;
    let task = run_async(world.service.get_task_by_id(id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("expected stored task"))?;

    if !task.is_completed() {
        return Err(eyre::eyre!("expected task to be completed"));
    }
    if task.completed_at().is_none() {
        return Err(eyre::eyre!(
            "expected completed task to carry a completion timestamp"
        ));
    }
    Ok(())
}

#[then("the task is stored as incomplete without a completion timestamp")]
fn task_stored_incomplete(world: &TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_created_id
        .ok_or_else(|| eyre::eyre!("missing created task id in scenario world"))?;
    let task = run_async(world.service.get_task_by_id(id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("expected stored task"))?;

    if task.is_completed() {
        return Err(eyre::eyre!("expected task to be incomplete"));
    }
    if task.completed_at().is_some() {
        return Err(eyre::eyre!(
            "expected reopened task to have no completion timestamp"
        ));
    }
    Ok(())
}

#[then("task creation fails because the title is empty")]
fn creation_rejected_for_blank_title(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;

    if !matches!(
        result,
        Err(TaskServiceError::Validation(TaskDomainError::EmptyTitle))
    ) {
        return Err(eyre::eyre!("expected empty-title rejection, got {result:?}"));
    }
    Ok(())
}

#[then("no tasks are stored")]
fn no_tasks_stored(world: &TaskWorld) -> Result<(), eyre::Report> {
    let listing = run_async(world.service.get_all_tasks(None, None))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if !listing.is_empty() {
        return Err(eyre::eyre!("expected empty store, found {}", listing.len()));
    }
    Ok(())
}

#[then("exactly {count:u64} tasks are listed")]
fn listing_has_exact_count(world: &TaskWorld, count: u64) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing in scenario world"))?;
    let actual = listing.len() as u64;
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}
