//! Status filtering semantics on task listings.

use super::helpers::{TestService, create_owned_task, service};
use rstest::rstest;
use taskdesk::task::{domain::TaskDomainError, services::TaskLifecycleError};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pending_filter_returns_exactly_the_uncompleted_task(service: TestService) {
    let to_complete = create_owned_task(&service, "u1", "Buy milk")
        .await
        .expect("task creation should succeed");
    let to_leave = create_owned_task(&service, "u1", "Walk the dog")
        .await
        .expect("task creation should succeed");

    service
        .toggle_complete("u1", "u1", to_complete.id())
        .await
        .expect("toggle should succeed");

    let pending = service
        .list("u1", "u1", "pending")
        .await
        .expect("listing should succeed");

    assert_eq!(pending.len(), 1);
    assert_eq!(pending.first().expect("one entry").id(), to_leave.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn all_filter_returns_every_task(service: TestService) {
    let first = create_owned_task(&service, "u1", "Buy milk")
        .await
        .expect("task creation should succeed");
    create_owned_task(&service, "u1", "Walk the dog")
        .await
        .expect("task creation should succeed");
    service
        .toggle_complete("u1", "u1", first.id())
        .await
        .expect("toggle should succeed");

    let all = service
        .list("u1", "u1", "all")
        .await
        .expect("listing should succeed");

    assert_eq!(all.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_filter_tracks_toggling(service: TestService) {
    let task = create_owned_task(&service, "u1", "Buy milk")
        .await
        .expect("task creation should succeed");

    let before = service
        .list("u1", "u1", "completed")
        .await
        .expect("listing should succeed");
    assert!(before.is_empty());

    service
        .toggle_complete("u1", "u1", task.id())
        .await
        .expect("toggle should succeed");

    let after = service
        .list("u1", "u1", "completed")
        .await
        .expect("listing should succeed");
    assert_eq!(after.len(), 1);
}

#[rstest]
#[case("done")]
#[case("finished")]
#[case("Pending")]
#[case("  pending ")]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_filter_value_is_rejected(service: TestService, #[case] filter: &str) {
    let result = service.list("u1", "u1", filter).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::UnknownStatusFilter(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_listing_is_not_an_error(service: TestService) {
    let tasks = service
        .list("u1", "u1", "all")
        .await
        .expect("listing should succeed");
    assert!(tasks.is_empty());
}
