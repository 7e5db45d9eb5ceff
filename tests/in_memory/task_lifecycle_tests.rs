//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskdeck::person::domain::PersonId;
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DueDatePatch, Priority, TaskStatus},
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn person(value: &str) -> PersonId {
    PersonId::new(value).expect("valid person id")
}

/// Asserts the listing holds exactly one task with the expected ID.
///
/// # Errors
///
/// Returns an error if the listing does not contain exactly one task
/// matching `expected_id`.
fn assert_single_task_listed(
    listed: &[taskdeck::task::domain::Task],
    expected_id: taskdeck::task::domain::TaskId,
) -> Result<(), eyre::Report> {
    eyre::ensure!(
        listed.len() == 1,
        "expected exactly one task, found {}",
        listed.len()
    );
    let task = listed
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.id() == expected_id, "task ID mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_assign_delete(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new(
            "T1",
            "D1",
            TaskStatus::Todo,
            Priority::Low,
        ))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::Todo);
    assert!(created.assigned_people().is_empty());

    let assigned = service
        .assign_person(created.id(), person("p1"))
        .await
        .expect("assignment should succeed");
    assert_eq!(assigned.assigned_people(), &[person("p1")]);

    let reassigned = service
        .assign_person(created.id(), person("p1"))
        .await
        .expect("repeated assignment should succeed");
    assert_eq!(reassigned.assigned_people(), &[person("p1")]);

    service
        .delete_task(created.id())
        .await
        .expect("delete should succeed");

    assert!(matches!(
        service.get_task(created.id()).await,
        Err(TaskLifecycleError::NotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reads_do_not_refresh_the_mutation_timestamp(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new(
            "Read check",
            "Reads must leave updatedAt alone",
            TaskStatus::Todo,
            Priority::Medium,
        ))
        .await
        .expect("task creation should succeed");

    let first_read = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    let second_read = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(first_read.updated_at(), created.updated_at());
    assert_eq!(second_read.updated_at(), created.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn due_date_survives_unrelated_updates_until_cleared(service: TestService) {
    let due = "2024-12-31T23:59:59Z".parse().expect("valid timestamp");
    let created = service
        .create_task(
            CreateTaskRequest::new(
                "Due date flow",
                "Tri-state due date over several updates",
                TaskStatus::Todo,
                Priority::High,
            )
            .with_due_date(due),
        )
        .await
        .expect("task creation should succeed");

    let renamed = service
        .update_task(created.id(), UpdateTaskRequest::new().with_title("Renamed"))
        .await
        .expect("update should succeed");
    assert_eq!(renamed.due_date(), Some(due));

    let cleared = service
        .update_task(
            created.id(),
            UpdateTaskRequest::new().with_due_date(DueDatePatch::Clear),
        )
        .await
        .expect("update should succeed");
    assert_eq!(cleared.due_date(), None);

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched.due_date(), None);
    assert_eq!(fetched.title().as_str(), "Renamed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignments_accumulate_across_operations(service: TestService) {
    let created = service
        .create_task(CreateTaskRequest::new(
            "Team task",
            "Multiple assignees",
            TaskStatus::InProgress,
            Priority::Urgent,
        ))
        .await
        .expect("task creation should succeed");

    service
        .assign_person(created.id(), person("p1"))
        .await
        .expect("first assignment should succeed");
    service
        .assign_person(created.id(), person("p2"))
        .await
        .expect("second assignment should succeed");
    let trimmed = service
        .unassign_person(created.id(), person("p1"))
        .await
        .expect("unassignment should succeed");

    assert_eq!(trimmed.assigned_people(), &[person("p2")]);

    // A status change must leave the assignment set alone.
    let updated = service
        .update_task(
            created.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::Done),
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.assigned_people(), &[person("p2")]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_tasks_disappear_from_listings(service: TestService) -> Result<(), eyre::Report> {
    let kept = service
        .create_task(CreateTaskRequest::new(
            "Kept",
            "Still listed",
            TaskStatus::Todo,
            Priority::Low,
        ))
        .await
        .expect("first creation should succeed");
    let removed = service
        .create_task(CreateTaskRequest::new(
            "Removed",
            "Deleted before listing",
            TaskStatus::Todo,
            Priority::Low,
        ))
        .await
        .expect("second creation should succeed");

    service
        .delete_task(removed.id())
        .await
        .expect("delete should succeed");

    let listed = service.list_tasks().await.expect("listing should succeed");
    assert_single_task_listed(&listed, kept.id())?;
    Ok(())
}
