//! Shared application state.

use std::sync::Arc;

use crate::services::task::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<TaskService>,
}

impl AppState {
    #[must_use]
    pub fn new(tasks: Arc<TaskService>) -> Self {
        Self { tasks }
    }
}
