//! Server-side rendered HTML dashboard (no JavaScript).

pub mod assets;
pub mod home;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the dashboard sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/style.css", get(assets::stylesheet))
}
