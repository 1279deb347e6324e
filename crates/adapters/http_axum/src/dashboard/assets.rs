//! Static assets shared with the WASM dashboard.

use axum::http::header;
use axum::response::IntoResponse;

/// The stylesheet of the WASM bundle, reused by the server-rendered page.
pub const STYLESHEET: &str = include_str!("../../../dashboard_leptos/style/main.css");

/// `GET /style.css`
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}
