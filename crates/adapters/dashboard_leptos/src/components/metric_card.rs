//! Metric card component: icon, name, colored value and description.

use leptos::prelude::*;
use secdash_domain::metric::Metric;

/// A card displaying one metric.
#[component]
pub fn MetricCard(
    /// The metric to show.
    metric: Metric,
) -> impl IntoView {
    let value_style = format!("color: {}", metric.color());
    let icon = metric.icon();

    view! {
        <div class="metric-card">
            <div class="metric-header">
                <span class="metric-icon">{icon}</span>
                <h3>{metric.name}</h3>
            </div>
            <div class="metric-value" style=value_style>{metric.value}</div>
            <p class="metric-description">{metric.description}</p>
        </div>
    }
}
