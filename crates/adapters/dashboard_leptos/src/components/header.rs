//! Page header with title, subtitle and the live timestamp.

use leptos::prelude::*;
use secdash_domain::overview;

/// Page header with title, subtitle and live timestamp.
#[component]
pub fn Header(
    /// Formatted "now", empty until the first tick.
    clock_text: ReadSignal<String>,
) -> impl IntoView {
    view! {
        <header class="App-header">
            <h1>{overview::TITLE}</h1>
            <p class="subtitle">{overview::SUBTITLE}</p>
            <p class="timestamp">{overview::LAST_UPDATED_LABEL}" "{move || clock_text.get()}</p>
        </header>
    }
}
