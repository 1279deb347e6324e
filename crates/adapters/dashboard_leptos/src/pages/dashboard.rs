//! The dashboard page: metric grid plus the static panels.

use leptos::prelude::*;
use secdash_domain::catalog;
use secdash_domain::metric::Metric;

use crate::clock::use_clock_text;
use crate::components::{DeploymentInfo, Header, MetricCard, StatusSummary};

/// The single dashboard page.
///
/// Owns the metric list and the clock text; the clock interval lives as long
/// as this component.
#[component]
pub fn Dashboard() -> impl IntoView {
    let (metrics, set_metrics) = signal(Vec::<Metric>::new());
    set_metrics.set(catalog::security_metrics());

    let clock_text = use_clock_text();

    view! {
        <div class="App">
            <Header clock_text=clock_text/>
            <main class="dashboard">
                <div class="metrics-grid">
                    {move || {
                        metrics
                            .get()
                            .into_iter()
                            .map(|metric| view! { <MetricCard metric=metric/> })
                            .collect_view()
                    }}
                </div>
                <StatusSummary/>
                <DeploymentInfo/>
            </main>
        </div>
    }
}
