//! Static text of the dashboard: header, status summary and deployment panel.
//!
//! The summary lines are fixed copy. They are not computed from the metric
//! list.

use crate::metric::MetricStatus;

/// Page title.
pub const TITLE: &str = "\u{1F6E1}\u{FE0F} Security Operations Dashboard";
/// Line under the title.
pub const SUBTITLE: &str = "Real-time Security Monitoring";
/// Prefix of the live timestamp line.
pub const LAST_UPDATED_LABEL: &str = "Last Updated:";

/// Heading of the status summary panel.
pub const SUMMARY_HEADING: &str = "\u{1F4CA} Security Status Overview";
/// Heading of the deployment panel.
pub const DEPLOYMENT_HEADING: &str = "\u{1F680} Deployment Information";

/// One colored dot with its caption in the summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub status: MetricStatus,
    pub text: &'static str,
}

/// One `label: value` line of the deployment panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentFact {
    pub label: &'static str,
    pub value: &'static str,
}

/// Summary panel items, in display order.
#[must_use]
pub fn status_summary() -> Vec<SummaryItem> {
    vec![
        SummaryItem {
            status: MetricStatus::Good,
            text: "Systems Operating Normally",
        },
        SummaryItem {
            status: MetricStatus::Warning,
            text: "2 Items Require Attention",
        },
        SummaryItem {
            status: MetricStatus::Critical,
            text: "No Critical Issues",
        },
    ]
}

/// Deployment panel lines, in display order.
pub const DEPLOYMENT_FACTS: [DeploymentFact; 4] = [
    DeploymentFact {
        label: "Platform",
        value: "AWS S3 + CloudFront",
    },
    DeploymentFact {
        label: "Security",
        value: "HTTPS with SSL/TLS",
    },
    DeploymentFact {
        label: "Built by",
        value: "Raymond Nwambuonwo",
    },
    DeploymentFact {
        label: "Project",
        value: "Operation Jump Ship - Static Website Deployment",
    },
];
