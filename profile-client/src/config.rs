//! Profile client configuration parsed from environment variables.

use crate::ProfileClientError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileClientTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ProfileClientTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileClientConfig {
    pub base_url: String,
    pub timeouts: ProfileClientTimeouts,
}

impl ProfileClientConfig {
    /// Build a config with default timeouts. Trailing slashes on the base
    /// URL are trimmed so path joining stays predictable.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), timeouts: ProfileClientTimeouts::default() }
    }

    /// Build typed client config from environment variables.
    ///
    /// Required:
    /// - `USER_SERVICE_URL`: base address of the profile service
    ///
    /// Optional:
    /// - `USER_SERVICE_TIMEOUT_SECS`: request timeout, default 5
    /// - `USER_SERVICE_CONNECT_TIMEOUT_SECS`: connect timeout, default 2
    ///
    /// # Errors
    ///
    /// Returns an error if `USER_SERVICE_URL` is not set.
    pub fn from_env() -> Result<Self, ProfileClientError> {
        let base_url = std::env::var("USER_SERVICE_URL")
            .map_err(|_| ProfileClientError::MissingBaseUrl { var: "USER_SERVICE_URL".into() })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeouts: ProfileClientTimeouts {
                request_secs: env_parse_u64("USER_SERVICE_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse_u64("USER_SERVICE_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            },
        })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
