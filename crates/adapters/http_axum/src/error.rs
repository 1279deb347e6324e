//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures while producing a dashboard page.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The HTML template could not be rendered.
    #[error("failed to render template")]
    Render(#[from] askama::Error),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let Self::Render(err) = &self;
        tracing::error!(error = %err, "template rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
