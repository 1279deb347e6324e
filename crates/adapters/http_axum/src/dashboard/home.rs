//! Dashboard home page: header, metric cards, summary and deployment panels.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use secdash_app::view::DashboardView;
use secdash_domain::metric::Metric;
use secdash_domain::overview::{self, DeploymentFact, SummaryItem};

use crate::error::DashboardError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    refresh_seconds: u32,
    title: &'static str,
    subtitle: &'static str,
    last_updated_label: &'static str,
    clock_text: String,
    metrics: Vec<Metric>,
    summary_heading: &'static str,
    summary: Vec<SummaryItem>,
    deployment_heading: &'static str,
    deployment: Vec<DeploymentFact>,
}

impl DashboardTemplate {
    /// Snapshot the view into a renderable page.
    #[must_use]
    pub fn from_view(view: &DashboardView, refresh_seconds: u32) -> Self {
        Self {
            refresh_seconds,
            title: overview::TITLE,
            subtitle: overview::SUBTITLE,
            last_updated_label: overview::LAST_UPDATED_LABEL,
            clock_text: view.clock_text(),
            metrics: view.metrics(),
            summary_heading: overview::SUMMARY_HEADING,
            summary: overview::status_summary(),
            deployment_heading: overview::DEPLOYMENT_HEADING,
            deployment: overview::DEPLOYMENT_FACTS.to_vec(),
        }
    }
}

/// `GET /`
///
/// # Errors
///
/// Returns [`DashboardError::Render`] if the template fails to render.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
    let page = DashboardTemplate::from_view(&state.view, state.refresh_seconds);
    Ok(Html(page.render()?))
}
