//! Task route handlers and request bodies.

use super::{AppState, error::ApiError};
use crate::person::domain::PersonId;
use crate::task::{
    domain::{DueDatePatch, Priority, Task, TaskId, TaskStatus},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskRequest},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Request body for creating a task.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTaskBody {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Initial workflow status.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: Priority,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Request body for partially updating a task.
///
/// The due-date member keeps the wire's three cases apart: an absent field
/// deserializes to `Keep` via the serde default, an explicit `null` to
/// `Clear`, and a timestamp to `Set`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTaskBody {
    /// Replacement title, when present.
    pub title: Option<String>,
    /// Replacement description, when present.
    pub description: Option<String>,
    /// Replacement status, when present.
    pub status: Option<TaskStatus>,
    /// Replacement priority, when present.
    pub priority: Option<Priority>,
    /// Tri-state due-date update.
    #[serde(default, deserialize_with = "deserialize_due_date_patch")]
    pub due_date: DueDatePatch,
}

impl UpdateTaskBody {
    fn into_request(self) -> UpdateTaskRequest {
        let mut request = UpdateTaskRequest::new().with_due_date(self.due_date);
        if let Some(title) = self.title {
            request = request.with_title(title);
        }
        if let Some(description) = self.description {
            request = request.with_description(description);
        }
        if let Some(status) = self.status {
            request = request.with_status(status);
        }
        if let Some(priority) = self.priority {
            request = request.with_priority(priority);
        }
        request
    }
}

/// Request body for assigning or unassigning a person.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssignPersonBody {
    /// Person identifier to add or remove.
    pub person_id: String,
}

fn deserialize_due_date_patch<'de, D>(deserializer: D) -> Result<DueDatePatch, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
    Ok(value.map_or(DueDatePatch::Clear, DueDatePatch::Set))
}

/// Maps a path segment onto a task identifier.
///
/// A value that is not a UUID can never name a live task, so it maps to the
/// same 404 a missing record produces.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    Uuid::parse_str(raw)
        .map(TaskId::from_uuid)
        .map_err(|_| task_not_found(raw))
}

fn task_not_found(id_text: impl std::fmt::Display) -> ApiError {
    ApiError::not_found(format!("Task with ID {id_text} not found"))
}

fn map_lifecycle_error(err: TaskLifecycleError) -> ApiError {
    match err {
        TaskLifecycleError::NotFound(id)
        | TaskLifecycleError::Repository(TaskRepositoryError::NotFound(id)) => task_not_found(id),
        TaskLifecycleError::Domain(domain_err) => ApiError::bad_request(domain_err.to_string()),
        TaskLifecycleError::Repository(repository_err) => ApiError::internal(&repository_err),
    }
}

fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

/// `GET /tasks` — lists all tasks.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state
        .tasks
        .list_tasks()
        .await
        .map_err(map_lifecycle_error)?;
    Ok(Json(tasks))
}

/// `GET /tasks/{id}` — retrieves one task.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let task = state
        .tasks
        .get_task(task_id)
        .await
        .map_err(map_lifecycle_error)?;
    Ok(Json(task))
}

/// `POST /tasks` — creates a task.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let body = require_body(payload)?;

    let mut request = CreateTaskRequest::new(body.title, body.description, body.status, body.priority);
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }

    let task = state
        .tasks
        .create_task(request)
        .await
        .map_err(map_lifecycle_error)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}` — partially updates a task.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let body = require_body(payload)?;

    let task = state
        .tasks
        .update_task(task_id, body.into_request())
        .await
        .map_err(map_lifecycle_error)?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}` — deletes a task.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let task_id = parse_task_id(&id)?;
    state
        .tasks
        .delete_task(task_id)
        .await
        .map_err(map_lifecycle_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /tasks/{id}/assign` — assigns a person to a task.
pub async fn assign_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AssignPersonBody>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let body = require_body(payload)?;
    let person_id =
        PersonId::new(body.person_id).map_err(|err| ApiError::bad_request(err.to_string()))?;

    let task = state
        .tasks
        .assign_person(task_id, person_id)
        .await
        .map_err(map_lifecycle_error)?;
    Ok(Json(task))
}

/// `POST /tasks/{id}/unassign` — unassigns a person from a task.
pub async fn unassign_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AssignPersonBody>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let task_id = parse_task_id(&id)?;
    let body = require_body(payload)?;
    let person_id =
        PersonId::new(body.person_id).map_err(|err| ApiError::bad_request(err.to_string()))?;

    let task = state
        .tasks
        .unassign_person(task_id, person_id)
        .await
        .map_err(map_lifecycle_error)?;
    Ok(Json(task))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn absent_due_date_field_means_keep() {
        let body: UpdateTaskBody =
            serde_json::from_str(r#"{"title": "Renamed"}"#).expect("body should deserialize");

        assert_eq!(body.due_date, DueDatePatch::Keep);
        assert_eq!(body.title.as_deref(), Some("Renamed"));
    }

    #[rstest]
    fn null_due_date_field_means_clear() {
        let body: UpdateTaskBody =
            serde_json::from_str(r#"{"dueDate": null}"#).expect("body should deserialize");

        assert_eq!(body.due_date, DueDatePatch::Clear);
    }

    #[rstest]
    fn due_date_value_means_set() {
        let body: UpdateTaskBody = serde_json::from_str(r#"{"dueDate": "2024-12-31T23:59:59Z"}"#)
            .expect("body should deserialize");

        let expected = "2024-12-31T23:59:59Z".parse().expect("valid timestamp");
        assert_eq!(body.due_date, DueDatePatch::Set(expected));
    }

    #[rstest]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<UpdateTaskBody>(r#"{"owner": "alice"}"#);

        assert!(result.is_err());
    }

    #[rstest]
    fn create_body_accepts_wire_enum_values() {
        let body: CreateTaskBody = serde_json::from_str(
            r#"{
                "title": "T1",
                "description": "D1",
                "status": "IN_PROGRESS",
                "priority": "URGENT"
            }"#,
        )
        .expect("body should deserialize");

        assert_eq!(body.status, TaskStatus::InProgress);
        assert_eq!(body.priority, Priority::Urgent);
        assert!(body.due_date.is_none());
    }
}
