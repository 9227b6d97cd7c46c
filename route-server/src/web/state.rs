//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::RouteConfig;

/// Shared application state.
///
/// Generic over the store so the same router serves the hosted database
/// and the in-memory mock.
pub struct AppState<S> {
    /// Place and edge store
    pub store: Arc<S>,

    /// Route planning configuration
    pub config: Arc<RouteConfig>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(store: S, config: RouteConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

// Derived Clone would require `S: Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}
