//! Router assembly.

pub mod tasks;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/task", get(tasks::list_tasks).post(tasks::create_task))
        .route("/api/v1/task/{id}", get(tasks::get_task).delete(tasks::delete_task))
        .route("/api/v1/task/{id}/with-user", get(tasks::get_task_with_user))
        .route("/api/v1/task/{id}/status", patch(tasks::update_task_status))
        .route("/api/v1/task/user/{user_id}", get(tasks::list_tasks_by_user))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
