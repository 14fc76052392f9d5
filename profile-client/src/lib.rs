//! HTTP client for the profile service's user API.
//!
//! DESIGN
//! ======
//! One typed method per remote operation, bound to a base address and a pair
//! of timeouts at construction. There is no retry and no circuit breaker: a
//! single synchronous call per invocation. Every failure mode — connect
//! error, timeout, non-success status, body decode — collapses into
//! [`ProfileClientError`]; callers must treat all variants identically and
//! never branch on "not found" versus "service down" at this layer.
//!
//! The [`ProfileApi`] trait is the seam orchestrators depend on, so the
//! network client can be swapped for a scripted double in tests.

pub mod config;

use std::time::Duration;

use contracts::{CreateProfileRequest, UserResponse};

pub use config::{ProfileClientConfig, ProfileClientTimeouts};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by profile client operations. Callers log these but do
/// not distinguish between variants.
#[derive(Debug, thiserror::Error)]
pub enum ProfileClientError {
    /// The required base URL environment variable is not set.
    #[error("profile service URL missing: env var {var} not set")]
    MissingBaseUrl { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request failed in transit (unreachable host, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The profile service returned a non-success HTTP status.
    #[error("response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// API TRAIT
// =============================================================================

/// Typed surface of the profile service consumed by the identity and task
/// services. Stateless and safe to call concurrently.
#[async_trait::async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the user record for a profile id.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileClientError`] for any transport, status, or decode
    /// failure.
    async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, ProfileClientError>;

    /// Create a profile record.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileClientError`] for any transport or status failure.
    async fn create_profile(&self, request: &CreateProfileRequest) -> Result<(), ProfileClientError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    /// Build a client from a typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: ProfileClientConfig) -> Result<Self, ProfileClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProfileClientError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url })
    }

    /// Build a client from `USER_SERVICE_URL` and the optional timeout vars.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or the HTTP client fails
    /// to build.
    pub fn from_env() -> Result<Self, ProfileClientError> {
        Self::new(ProfileClientConfig::from_env()?)
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/api/v1/user/{id}", self.base_url)
    }

    fn users_url(&self) -> String {
        format!("{}/api/v1/user", self.base_url)
    }
}

#[async_trait::async_trait]
impl ProfileApi for ProfileClient {
    async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, ProfileClientError> {
        let response = self
            .http
            .get(self.user_url(id))
            .send()
            .await
            .map_err(|e| ProfileClientError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProfileClientError::Status { status, body });
        }

        response
            .json::<UserResponse>()
            .await
            .map_err(|e| ProfileClientError::Parse(e.to_string()))
    }

    async fn create_profile(&self, request: &CreateProfileRequest) -> Result<(), ProfileClientError> {
        let response = self
            .http
            .post(self.users_url())
            .json(request)
            .send()
            .await
            .map_err(|e| ProfileClientError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProfileClientError::Status { status, body });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
