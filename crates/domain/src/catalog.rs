//! The fixed set of metrics the dashboard starts with.

use crate::metric::{Metric, MetricStatus};

/// Build the mock security metrics, in display order.
#[must_use]
pub fn security_metrics() -> Vec<Metric> {
    vec![
        Metric::new(
            "Failed Login Attempts",
            3,
            MetricStatus::Good,
            "Login attempts blocked in last hour",
        ),
        Metric::new(
            "SSL Certificates Expiring",
            2,
            MetricStatus::Warning,
            "Certificates expiring within 30 days",
        ),
        Metric::new(
            "Open Security Vulnerabilities",
            0,
            MetricStatus::Good,
            "Critical vulnerabilities requiring attention",
        ),
        Metric::new(
            "Firewall Rules Updated",
            24,
            MetricStatus::Good,
            "Hours since last firewall rule update",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_contain_four_metrics_in_order() {
        let metrics = security_metrics();
        let summary: Vec<(&str, u32, MetricStatus)> = metrics
            .iter()
            .map(|m| (m.name.as_str(), m.value, m.status.clone()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Failed Login Attempts", 3, MetricStatus::Good),
                ("SSL Certificates Expiring", 2, MetricStatus::Warning),
                ("Open Security Vulnerabilities", 0, MetricStatus::Good),
                ("Firewall Rules Updated", 24, MetricStatus::Good),
            ]
        );
    }

    #[test]
    fn should_carry_descriptions() {
        let descriptions: Vec<String> = security_metrics()
            .into_iter()
            .map(|m| m.description)
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Login attempts blocked in last hour",
                "Certificates expiring within 30 days",
                "Critical vulnerabilities requiring attention",
                "Hours since last firewall rule update",
            ]
        );
    }

    #[test]
    fn should_only_use_known_statuses() {
        assert!(security_metrics().iter().all(|m| m.status.is_known()));
    }
}
