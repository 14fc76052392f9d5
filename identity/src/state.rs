//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! registration service is constructed once in `main` with its store and
//! profile client dependencies and shared behind an `Arc`.

use std::sync::Arc;

use crate::services::registration::RegistrationService;

#[derive(Clone)]
pub struct AppState {
    pub registration: Arc<RegistrationService>,
}

impl AppState {
    #[must_use]
    pub fn new(registration: Arc<RegistrationService>) -> Self {
        Self { registration }
    }
}
