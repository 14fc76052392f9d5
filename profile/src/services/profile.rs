//! Profile service — leaf CRUD plus the user lookup consumed by the other
//! services.
//!
//! DESIGN
//! ======
//! This service makes no outbound calls. Profiles are created either
//! directly through its API or by the identity service's registration
//! fan-out; the same create path serves both. The `get_user` lookup is the
//! shape the task service joins against at read time.

use std::sync::Arc;

use contracts::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest, UserResponse};
use uuid::Uuid;

use crate::store::{ProfileRecord, ProfileStore};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("invalid request: {0}")]
    Validation(&'static str),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    #[must_use]
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Create a profile with a service-generated id.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty fields and a database error if
    /// the insert fails.
    pub async fn create(&self, request: CreateProfileRequest) -> Result<ProfileResponse, ProfileError> {
        if request.auth_id.trim().is_empty() {
            return Err(ProfileError::Validation("authId must not be empty"));
        }
        if request.username.trim().is_empty() {
            return Err(ProfileError::Validation("username must not be empty"));
        }

        let record = ProfileRecord {
            id: Uuid::new_v4().to_string(),
            auth_id: request.auth_id,
            username: request.username,
            email: request.email,
        };
        let saved = self.store.save(record).await?;
        Ok(to_response(saved))
    }

    /// Fetch the user lookup shape for a profile id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the profile is absent.
    pub async fn get_user(&self, id: &str) -> Result<UserResponse, ProfileError> {
        let profile = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))?;

        Ok(UserResponse { id: profile.id, name: profile.username, email: Some(profile.email) })
    }

    /// List all profiles.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list(&self) -> Result<Vec<ProfileResponse>, ProfileError> {
        let rows = self.store.find_all().await?;
        Ok(rows.into_iter().map(to_response).collect())
    }

    /// Rewrite a profile's username and email.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the profile is absent and a validation error
    /// for an empty username.
    pub async fn update(&self, id: &str, request: UpdateProfileRequest) -> Result<ProfileResponse, ProfileError> {
        if request.username.trim().is_empty() {
            return Err(ProfileError::Validation("username must not be empty"));
        }

        let updated = self
            .store
            .update(id, &request.username, &request.email)
            .await?
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))?;

        Ok(to_response(updated))
    }

    /// Delete a profile. Existence is checked first so absence surfaces as
    /// `NotFound`, never as a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the profile is absent.
    pub async fn delete(&self, id: &str) -> Result<(), ProfileError> {
        if !self.store.exists_by_id(id).await? {
            return Err(ProfileError::NotFound(id.to_string()));
        }
        self.store.delete_by_id(id).await?;
        Ok(())
    }
}

fn to_response(record: ProfileRecord) -> ProfileResponse {
    ProfileResponse {
        id: record.id,
        auth_id: record.auth_id,
        username: record.username,
        email: record.email,
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
