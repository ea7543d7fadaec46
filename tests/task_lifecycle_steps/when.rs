//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#""{caller}" toggles the task complete"#)]
fn toggle_current_task(world: &mut TaskLifecycleWorld, caller: String) -> Result<(), eyre::Report> {
    let id = world
        .current_task_id
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?;

    let result = run_async(world.service.toggle_complete(&caller, &caller, id));
    world.last_task_result = Some(result);
    Ok(())
}

#[when(r#""{caller}" completes the task titled "{title}""#)]
fn complete_task_by_title(
    world: &mut TaskLifecycleWorld,
    caller: String,
    title: String,
) -> Result<(), eyre::Report> {
    let id = world
        .ids_by_title
        .get(&title)
        .copied()
        .ok_or_else(|| eyre::eyre!("no task titled '{title}' in scenario world"))?;

    let result = run_async(world.service.toggle_complete(&caller, &caller, id));
    world.last_task_result = Some(result);
    Ok(())
}

#[when(r#""{caller}" fetches the task"#)]
fn fetch_current_task(world: &mut TaskLifecycleWorld, caller: String) -> Result<(), eyre::Report> {
    let id = world
        .current_task_id
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?;

    let result = run_async(world.service.get(&caller, &caller, id));
    world.last_task_result = Some(result);
    Ok(())
}

#[when(r#""{caller}" deletes the task"#)]
fn delete_current_task(world: &mut TaskLifecycleWorld, caller: String) -> Result<(), eyre::Report> {
    let id = world
        .current_task_id
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?;

    let result = run_async(world.service.delete(&caller, &caller, id));
    world.last_delete_result = Some(result);
    Ok(())
}

#[when(r#""{caller}" lists tasks with filter "{filter}""#)]
fn list_tasks(world: &mut TaskLifecycleWorld, caller: String, filter: String) {
    let result = run_async(world.service.list(&caller, &caller, &filter));
    world.last_listing_result = Some(result);
}

#[when(r#""{caller}" attempts to list tasks for "{declared_owner}""#)]
fn list_tasks_for_other_owner(
    world: &mut TaskLifecycleWorld,
    caller: String,
    declared_owner: String,
) {
    let result = run_async(world.service.list(&declared_owner, &caller, "all"));
    world.last_listing_result = Some(result);
}
