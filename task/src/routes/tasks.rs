//! Task CRUD and task-with-user routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use contracts::{CreateTaskRequest, TaskResponse, TaskWithUserResponse, UpdateTaskStatusRequest};
use uuid::Uuid;

use crate::services::task::TaskError;
use crate::state::AppState;

/// `POST /api/v1/task` — create a task with status `PENDING`.
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let task = state.tasks.create(body).await.map_err(task_error_to_status)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /api/v1/task` — list all tasks.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskResponse>>, StatusCode> {
    let tasks = state.tasks.list().await.map_err(task_error_to_status)?;
    Ok(Json(tasks))
}

/// `GET /api/v1/task/{id}` — fetch one task.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, StatusCode> {
    let task = state.tasks.get(id).await.map_err(task_error_to_status)?;
    Ok(Json(task))
}

/// `GET /api/v1/task/{id}/with-user` — fetch one task joined with its
/// owning user. A failed profile lookup yields `user: null`, never a
/// request failure.
pub async fn get_task_with_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskWithUserResponse>, StatusCode> {
    let task = state.tasks.get_with_user(id).await.map_err(task_error_to_status)?;
    Ok(Json(task))
}

/// `GET /api/v1/task/user/{user_id}` — list tasks owned by one user.
pub async fn list_tasks_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<TaskResponse>>, StatusCode> {
    let tasks = state
        .tasks
        .list_by_user(&user_id)
        .await
        .map_err(task_error_to_status)?;
    Ok(Json(tasks))
}

/// `PATCH /api/v1/task/{id}/status` — rewrite a task's status.
pub async fn update_task_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTaskStatusRequest>,
) -> Result<Json<TaskResponse>, StatusCode> {
    let task = state
        .tasks
        .update_status(id, body)
        .await
        .map_err(task_error_to_status)?;
    Ok(Json(task))
}

/// `DELETE /api/v1/task/{id}` — delete a task.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    state.tasks.delete(id).await.map_err(task_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn task_error_to_status(err: TaskError) -> StatusCode {
    match err {
        TaskError::NotFound(_) => StatusCode::NOT_FOUND,
        TaskError::Validation(_) => StatusCode::BAD_REQUEST,
        TaskError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tests;
