mod deployment_info;
mod header;
mod metric_card;
mod status_summary;

pub use deployment_info::DeploymentInfo;
pub use header::Header;
pub use metric_card::MetricCard;
pub use status_summary::StatusSummary;
