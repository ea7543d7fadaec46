//! Cross-identity isolation and denial over the in-memory repository.

use super::helpers::{TestService, create_owned_task, service};
use rstest::rstest;
use taskdesk::task::{
    domain::AccessDenied,
    services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskRequest},
};

#[rstest]
#[case("all")]
#[case("pending")]
#[case("completed")]
#[tokio::test(flavor = "multi_thread")]
async fn listings_never_include_foreign_tasks(service: TestService, #[case] filter: &str) {
    create_owned_task(&service, "u1", "Buy milk")
        .await
        .expect("task creation should succeed");
    let foreign = create_owned_task(&service, "u1", "Walk the dog")
        .await
        .expect("task creation should succeed");
    service
        .toggle_complete("u1", "u1", foreign.id())
        .await
        .expect("toggle should succeed");

    let for_u2 = service
        .list("u2", "u2", filter)
        .await
        .expect("listing should succeed");

    assert!(for_u2.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_operation_rejects_a_mismatched_path_owner(service: TestService) {
    let task = create_owned_task(&service, "u1", "Buy milk")
        .await
        .expect("task creation should succeed");

    let create = service
        .create(CreateTaskRequest::new("u1", "u2", "Sneaky"))
        .await;
    let list = service.list("u1", "u2", "all").await;
    let get = service.get("u1", "u2", task.id()).await;
    let update = service
        .update(UpdateTaskRequest::new("u1", "u2", task.id()).with_title("Sneaky"))
        .await;
    let toggle = service.toggle_complete("u1", "u2", task.id()).await;
    let delete = service.delete("u1", "u2", task.id()).await;

    for result in [
        create.map(|_| ()),
        list.map(|_| ()),
        get.map(|_| ()),
        update.map(|_| ()),
        toggle.map(|_| ()),
        delete,
    ] {
        assert!(matches!(
            result,
            Err(TaskLifecycleError::Forbidden(
                AccessDenied::IdentityMismatch
            ))
        ));
    }

    // The record is untouched by any of the denied attempts.
    let untouched = service
        .get("u1", "u1", task.id())
        .await
        .expect("fetch should succeed");
    assert_eq!(untouched, task);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn single_resource_operations_deny_foreign_records(service: TestService) {
    let foreign = create_owned_task(&service, "u2", "File taxes")
        .await
        .expect("task creation should succeed");

    let get = service.get("u1", "u1", foreign.id()).await;
    let update = service
        .update(UpdateTaskRequest::new("u1", "u1", foreign.id()).with_title("Hijacked"))
        .await;
    let toggle = service.toggle_complete("u1", "u1", foreign.id()).await;
    let delete = service.delete("u1", "u1", foreign.id()).await;

    for result in [
        get.map(|_| ()),
        update.map(|_| ()),
        toggle.map(|_| ()),
        delete,
    ] {
        assert!(matches!(
            result,
            Err(TaskLifecycleError::Forbidden(
                AccessDenied::ResourceOwnershipMismatch
            ))
        ));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_ids_and_foreign_ids_are_reported_distinctly(service: TestService) {
    let foreign = create_owned_task(&service, "u2", "File taxes")
        .await
        .expect("task creation should succeed");

    let on_foreign = service.get("u1", "u1", foreign.id()).await;
    let on_missing = service
        .get("u1", "u1", taskdesk::task::domain::TaskId::from_raw(999))
        .await;

    assert!(matches!(
        on_foreign,
        Err(TaskLifecycleError::Forbidden(_))
    ));
    assert!(matches!(on_missing, Err(TaskLifecycleError::NotFound(_))));
}
