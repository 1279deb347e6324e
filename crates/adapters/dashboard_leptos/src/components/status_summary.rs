//! Security status overview panel.

use leptos::prelude::*;
use secdash_domain::overview;

/// Fixed status overview panel.
#[component]
pub fn StatusSummary() -> impl IntoView {
    view! {
        <div class="info-section">
            <h2>{overview::SUMMARY_HEADING}</h2>
            <div class="status-summary">
                {overview::status_summary()
                    .into_iter()
                    .map(|item| {
                        let dot_class = format!("status-dot {}", item.status.css_class());
                        view! {
                            <div class="status-item">
                                <span class=dot_class></span>
                                <span>{item.text}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
