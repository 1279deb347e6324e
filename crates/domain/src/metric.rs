//! Metric: a named numeric observation shown as one dashboard card.

mod status;

pub use status::{MetricStatus, NEUTRAL_COLOR, NEUTRAL_ICON, UnknownStatus};

use serde::{Deserialize, Serialize};

/// A single security metric.
///
/// Metrics are built once when the view starts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Short label shown as the card title.
    pub name: String,
    /// Value displayed in the status color.
    pub value: u32,
    /// Severity driving color and icon.
    pub status: MetricStatus,
    /// Explanation rendered under the value.
    pub description: String,
}

impl Metric {
    /// Create a metric.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: u32,
        status: MetricStatus,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            status,
            description: description.into(),
        }
    }

    /// Hex color of the value, derived from the status.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.status.color()
    }

    /// Icon of the card header, derived from the status.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.status.icon()
    }
}
