//! Given steps for task management BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdeck::task::services::CreateTaskRequest;

#[given(r#"a task titled "{title}" with description "{description}""#)]
fn task_to_be_created(world: &mut TaskWorld, title: String, description: String) {
    world.pending_request = Some(CreateTaskRequest::new(title).with_description(description));
}

#[given(r#"a pending task titled "{title}""#)]
fn pending_task_exists(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_task(CreateTaskRequest::new(title)))
        .wrap_err("create pending task")?;
    world.last_created_id = Some(created.id());
    Ok(())
}

#[given(r#"a completed task titled "{title}""#)]
fn completed_task_exists(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_task(CreateTaskRequest::new(title)))
        .wrap_err("create task for completion")?;
    run_async(world.service.toggle_task_completion(created.id()))
        .wrap_err("complete freshly created task")?;
    world.last_created_id = Some(created.id());
    Ok(())
}
