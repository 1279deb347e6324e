//! # secdash-adapter-dashboard-leptos
//!
//! Client-side rendered dashboard, compiled to WASM and built with `trunk`.
//! Renders the same header, cards and panels as the server-rendered page,
//! with the clock refreshed in the browser once per second.

use leptos::prelude::*;

mod clock;
mod components;
mod pages;

use pages::Dashboard;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! { <Dashboard/> }
}
