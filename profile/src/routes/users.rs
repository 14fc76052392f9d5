//! Profile CRUD and user lookup routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use contracts::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest, UserResponse};

use crate::services::profile::ProfileError;
use crate::state::AppState;

/// `POST /api/v1/user` — create a profile. Called directly and by the
/// identity service's registration fan-out.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateProfileRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let profile = state
        .profiles
        .create(body)
        .await
        .map_err(profile_error_to_status)?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// `GET /api/v1/user` — list all profiles.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<ProfileResponse>>, StatusCode> {
    let profiles = state.profiles.list().await.map_err(profile_error_to_status)?;
    Ok(Json(profiles))
}

/// `GET /api/v1/user/{id}` — user lookup consumed by the task service's
/// read aggregation.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, StatusCode> {
    let user = state.profiles.get_user(&id).await.map_err(profile_error_to_status)?;
    Ok(Json(user))
}

/// `PUT /api/v1/user/{id}` — rewrite username and email.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let profile = state
        .profiles
        .update(&id, body)
        .await
        .map_err(profile_error_to_status)?;
    Ok(Json(profile))
}

/// `DELETE /api/v1/user/{id}` — delete a profile.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    state
        .profiles
        .delete(&id)
        .await
        .map_err(profile_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn profile_error_to_status(err: ProfileError) -> StatusCode {
    match err {
        ProfileError::NotFound(_) => StatusCode::NOT_FOUND,
        ProfileError::Validation(_) => StatusCode::BAD_REQUEST,
        ProfileError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
