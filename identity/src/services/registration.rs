//! Registration orchestration — durable identity write plus best-effort
//! profile fan-out.
//!
//! DESIGN
//! ======
//! The identity insert completes before the profile call is attempted. The
//! profile call is fire-and-check: a failure is logged at WARN and the caller
//! still receives the saved identity. There is no rollback and no retry, so
//! a crash or network failure between the two writes leaves an identity with
//! no profile. That gap is accepted; the downstream call sits behind the
//! `ProfileApi` seam so a retry queue or outbox could replace it later
//! without touching persistence.

use std::sync::Arc;

use contracts::{CreateProfileRequest, IdentityResponse, LoginRequest, RegisterRequest};
use profile_client::ProfileApi;

use crate::store::{IdentityStore, NewIdentity};

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("invalid request: {0}")]
    Validation(&'static str),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

pub struct RegistrationService {
    store: Arc<dyn IdentityStore>,
    profiles: Arc<dyn ProfileApi>,
}

impl RegistrationService {
    #[must_use]
    pub fn new(store: Arc<dyn IdentityStore>, profiles: Arc<dyn ProfileApi>) -> Self {
        Self { store, profiles }
    }

    /// Register a new identity and fan out profile creation.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty fields and a database error if
    /// the identity insert fails. A profile-service failure is not an error:
    /// by then the identity is already durable and is returned as-is.
    pub async fn register(&self, request: RegisterRequest) -> Result<IdentityResponse, RegistrationError> {
        if request.user_name.trim().is_empty() {
            return Err(RegistrationError::Validation("userName must not be empty"));
        }
        if request.email.trim().is_empty() {
            return Err(RegistrationError::Validation("email must not be empty"));
        }
        if request.password.is_empty() {
            return Err(RegistrationError::Validation("password must not be empty"));
        }

        let identity = self
            .store
            .save(NewIdentity {
                user_name: request.user_name,
                email: request.email,
                password: request.password,
            })
            .await?;

        let fan_out = CreateProfileRequest {
            auth_id: identity.id.to_string(),
            username: identity.user_name.clone(),
            email: identity.email.clone(),
        };
        if let Err(e) = self.profiles.create_profile(&fan_out).await {
            // Accepted consistency gap: the identity stays without a profile.
            tracing::warn!(
                error = %e,
                identity_id = %identity.id,
                "profile creation failed; identity kept without profile"
            );
        }

        Ok(IdentityResponse { id: identity.id, user_name: identity.user_name, email: identity.email })
    }

    /// Check whether an identity with the given credentials exists. No
    /// session or token is issued.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty fields and a database error if
    /// the existence check fails.
    pub async fn login(&self, request: LoginRequest) -> Result<bool, RegistrationError> {
        if request.user_name.trim().is_empty() || request.password.is_empty() {
            return Err(RegistrationError::Validation("userName and password are required"));
        }

        Ok(self
            .store
            .exists_by_username_and_password(&request.user_name, &request.password)
            .await?)
    }
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
