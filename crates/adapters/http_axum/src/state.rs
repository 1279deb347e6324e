//! Shared application state for axum handlers.

use std::sync::Arc;

use secdash_app::view::DashboardView;

/// Application state shared across all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The dashboard instance rendered by `GET /`.
    pub view: Arc<DashboardView>,
    /// Value of the page's `<meta http-equiv="refresh">`.
    pub refresh_seconds: u32,
}

impl AppState {
    /// Create a new application state around a shared view.
    #[must_use]
    pub fn new(view: Arc<DashboardView>, refresh_seconds: u32) -> Self {
        Self {
            view,
            refresh_seconds,
        }
    }
}
