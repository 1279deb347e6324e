//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the dashboard pages at `/`, and the built WASM bundle under `/app`
/// when `bundle_dir` is given. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState, bundle_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes());

    if let Some(dir) = bundle_dir {
        tracing::info!(dir = %dir.display(), "serving dashboard bundle under /app");
        router = router.nest_service("/app", ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
