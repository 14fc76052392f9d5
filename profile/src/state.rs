//! Shared application state.

use std::sync::Arc;

use crate::services::profile::ProfileService;

#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<ProfileService>,
}

impl AppState {
    #[must_use]
    pub fn new(profiles: Arc<ProfileService>) -> Self {
        Self { profiles }
    }
}
