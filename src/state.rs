//! Shared application state for all routes.

use crate::store::ProductStore;
use std::sync::Arc;

/// Holds the injected product store. Constructed once at bootstrap; tests
/// build one over [`crate::store::MemoryStore`] instead of PostgreSQL.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}
