use std::sync::Arc;

use pages_core::store::PageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone, Default)]
pub struct AppState {
    /// The single page store for this process.
    pub store: Arc<PageStore>,
}

impl AppState {
    /// State with a fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}
