//! # secdash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: the page is rendered from the current
//!   [`DashboardView`](secdash_app::view::DashboardView) state and reloads
//!   itself with `<meta http-equiv="refresh">`
//! - Serve the shared stylesheet and, when configured, the built WASM
//!   dashboard bundle as static files under `/app`
//! - Expose `/health` for the hosting platform
//!
//! ## Dependency rule
//! Depends on `secdash-app` (view state) and `secdash-domain` (metrics and
//! static copy). Never leaks axum types into the domain.

pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
