//! Metric status: severity used to pick a color and an icon.

use serde::{Deserialize, Serialize};

/// Color used for values whose status is not one of the known variants.
pub const NEUTRAL_COLOR: &str = "#6B7280";
/// Icon used for values whose status is not one of the known variants.
pub const NEUTRAL_ICON: &str = "\u{26AA}";

/// Severity of a [`Metric`](super::Metric).
///
/// Only [`Good`](Self::Good), [`Warning`](Self::Warning) and
/// [`Critical`](Self::Critical) are produced by this crate. Any other label
/// (from deserialization or `From<&str>`) is kept in
/// [`Other`](Self::Other) and rendered with the neutral color and icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetricStatus {
    Good,
    Warning,
    Critical,
    Other(UnknownStatus),
}

/// A status label outside `good`, `warning` and `critical`.
///
/// Only built by the `From` conversions of [`MetricStatus`], so it never
/// holds one of the known labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(String);

impl UnknownStatus {
    /// The label as received.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl MetricStatus {
    /// Hex color used to paint the metric value.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#10B981",
            Self::Warning => "#F59E0B",
            Self::Critical => "#EF4444",
            Self::Other(_) => NEUTRAL_COLOR,
        }
    }

    /// Glyph shown in the card header.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Good => "\u{2705}",
            Self::Warning => "\u{26A0}\u{FE0F}",
            Self::Critical => "\u{1F6A8}",
            Self::Other(_) => NEUTRAL_ICON,
        }
    }

    /// CSS class of the status dot (`good`, `warning`, `critical`, `unknown`).
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Other(_) => "unknown",
        }
    }

    #[cfg(test)]
    pub(crate) fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for MetricStatus {
    fn from(value: &str) -> Self {
        match value {
            "good" => Self::Good,
            "warning" => Self::Warning,
            "critical" => Self::Critical,
            other => Self::Other(UnknownStatus(other.to_string())),
        }
    }
}

impl From<String> for MetricStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "good" => Self::Good,
            "warning" => Self::Warning,
            "critical" => Self::Critical,
            _ => Self::Other(UnknownStatus(value)),
        }
    }
}

impl From<MetricStatus> for String {
    fn from(status: MetricStatus) -> Self {
        match status {
            MetricStatus::Other(UnknownStatus(label)) => label,
            known => known.to_string(),
        }
    }
}

impl std::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => f.write_str("good"),
            Self::Warning => f.write_str("warning"),
            Self::Critical => f.write_str("critical"),
            Self::Other(unknown) => f.write_str(unknown.label()),
        }
    }
}
