/// Task resource endpoints
///
/// Same thin shape as the user handlers, with one addition: task creation
/// validates that the supplied user_id references an existing user before
/// inserting.
///
/// # Endpoints
///
/// - `GET    /task/` - List all tasks
/// - `GET    /task/:task_id` - Get a task by ID
/// - `POST   /task/create?user_id=` - Create a task for a user
/// - `PUT    /task/update/:task_id` - Update title/content/priority
/// - `DELETE /task/delete/:task_id` - Delete a task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::Ack,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskman_shared::models::{
    task::{CreateTask, Task, UpdateTask},
    user::User,
};

/// Owning user selector for task creation, passed as a query parameter
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    /// ID of the user the new task belongs to
    pub user_id: i64,
}

/// `GET /task/` - Returns all tasks
///
/// Always succeeds; an empty database yields an empty array.
pub async fn all_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

/// `GET /task/:task_id` - Returns the task matching the ID
///
/// # Errors
///
/// - `404 Not Found`: "Task was not found"
pub async fn task_by_id(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(task))
}

/// `POST /task/create?user_id=` - Creates a new task for an existing user
///
/// The owning user is supplied as a query parameter, not in the body, and
/// must exist; otherwise no row is persisted.
///
/// # Request
///
/// ```json
/// {
///   "title": "Write report",
///   "content": "Quarterly numbers",
///   "priority": 1
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"status_code": 201, "transaction": "Successful"}`
///
/// # Errors
///
/// - `404 Not Found`: "User was not found" (user_id does not exist)
pub async fn create_task(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
    Json(payload): Json<CreateTask>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    // Validate the foreign-key reference before inserting.
    User::find_by_id(&state.db, query.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    let id = Task::create(&state.db, payload, query.user_id).await?;
    tracing::debug!(task_id = id, user_id = query.user_id, "Created task");

    Ok((StatusCode::CREATED, Json(Ack::created())))
}

/// `PUT /task/update/:task_id` - Updates title, content and priority
///
/// user_id is immutable. Existence is checked via the affected-row count,
/// not a pre-read.
///
/// # Errors
///
/// - `404 Not Found`: "Task was not found" (no row matched)
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<UpdateTask>,
) -> ApiResult<Json<Ack>> {
    let affected = Task::update(&state.db, task_id, payload).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(Ack::ok("Task update is successful!")))
}

/// `DELETE /task/delete/:task_id` - Deletes a task by ID
///
/// # Errors
///
/// - `404 Not Found`: "Task was not found" (no row matched)
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<Ack>> {
    let affected = Task::delete(&state.db, task_id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(Ack::ok("Task deleted successfully!")))
}
