//! Registration and login routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use contracts::{LoginRequest, RegisterRequest};

use crate::services::registration::RegistrationError;
use crate::state::AppState;

/// `POST /api/v1/auth/register` — persist an identity, then fan out profile
/// creation. Returns 201 with the identity record even when the fan-out
/// fails.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let identity = state
        .registration
        .register(body)
        .await
        .map_err(registration_error_to_status)?;

    Ok((StatusCode::CREATED, Json(identity)))
}

/// `POST /api/v1/auth/login` — credential existence check.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<bool>, StatusCode> {
    let ok = state
        .registration
        .login(body)
        .await
        .map_err(registration_error_to_status)?;

    Ok(Json(ok))
}

pub(crate) fn registration_error_to_status(err: RegistrationError) -> StatusCode {
    match err {
        RegistrationError::Validation(_) => StatusCode::BAD_REQUEST,
        RegistrationError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
