//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::task::services::CreateTaskRequest;

#[given(r#"a task "{title}" owned by "{owner}""#)]
fn existing_task(
    world: &mut TaskLifecycleWorld,
    title: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create(CreateTaskRequest::new(&owner, &owner, &title)),
    )
    .wrap_err("create task in scenario setup")?;

    world.ids_by_title.insert(title, created.id());
    world.current_task_id = Some(created.id());
    Ok(())
}
