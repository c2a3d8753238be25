//! Shared application state for all routes.

use crate::store::ConfigStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ConfigStore>,
}

impl AppState {
    pub fn new(store: impl ConfigStore + 'static) -> Self {
        AppState { store: Arc::new(store) }
    }
}
