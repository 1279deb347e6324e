//! Deployment information panel.

use leptos::prelude::*;
use secdash_domain::overview;

/// Fixed deployment information panel.
#[component]
pub fn DeploymentInfo() -> impl IntoView {
    view! {
        <div class="deployment-info">
            <h3>{overview::DEPLOYMENT_HEADING}</h3>
            {overview::DEPLOYMENT_FACTS
                .into_iter()
                .map(|fact| {
                    view! {
                        <p>
                            <strong>{fact.label}":"</strong>
                            " "
                            {fact.value}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}
