//! Wire contracts shared by the identity, profile, and task services.
//!
//! DESIGN
//! ======
//! Every request/response body that crosses a service boundary lives here so
//! the three services and the profile client agree on one JSON shape. Field
//! names travel as camelCase; task status values travel as
//! SCREAMING_SNAKE_CASE strings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// IDENTITY
// =============================================================================

/// Body for `POST /api/v1/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/v1/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Identity record returned from registration. The stored credential is
/// never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
}

// =============================================================================
// PROFILE
// =============================================================================

/// Body for `POST /api/v1/user`. Also sent by the identity service when it
/// fans out profile creation after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub auth_id: String,
    pub username: String,
    pub email: String,
}

/// Body for `PUT /api/v1/user/{id}`. The identity back-reference is fixed at
/// creation and cannot be rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
}

/// Full profile record owned by the profile service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub auth_id: String,
    pub username: String,
    pub email: String,
}

/// Shape served by `GET /api/v1/user/{id}` and embedded into task-with-user
/// reads by the task service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// =============================================================================
// TASK
// =============================================================================

/// Task lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "IN_PROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Body for `POST /api/v1/task`. The owning-user id is stored as an opaque
/// string and is not validated against the profile service at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub user_id: String,
    pub title: String,
}

/// Body for `PATCH /api/v1/task/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}

/// Task record returned from the plain CRUD surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub status: TaskStatus,
}

/// Task record enriched with its owning user. `user` is `null` whenever the
/// profile lookup fails for any reason; the task fields are always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithUserResponse {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub status: TaskStatus,
    pub user: Option<UserResponse>,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
