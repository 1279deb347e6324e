//! Dashboard view state: the metric list and the clock text.

use tokio::sync::watch;

use secdash_domain::catalog;
use secdash_domain::metric::Metric;

/// State owned by one dashboard instance.
///
/// Both values live in [`watch`] channels: writers replace the whole value,
/// readers borrow the latest one. Nothing here is shared through globals.
pub struct DashboardView {
    metrics: watch::Sender<Vec<Metric>>,
    clock_text: watch::Sender<String>,
}

impl DashboardView {
    /// Create an empty view: no metrics, empty clock text.
    #[must_use]
    pub fn new() -> Self {
        let (metrics, _) = watch::channel(Vec::new());
        let (clock_text, _) = watch::channel(String::new());
        Self {
            metrics,
            clock_text,
        }
    }

    /// Create a view populated with the fixed security metrics.
    #[must_use]
    pub fn initialized() -> Self {
        let view = Self::new();
        view.set_metrics(catalog::security_metrics());
        view
    }

    /// Replace the metric list. Order is display order.
    pub fn set_metrics(&self, metrics: Vec<Metric>) {
        tracing::debug!(count = metrics.len(), "metrics replaced");
        self.metrics.send_replace(metrics);
    }

    /// Replace the clock text.
    pub fn set_clock_text(&self, text: String) {
        self.clock_text.send_replace(text);
    }

    /// Snapshot of the current metric list.
    #[must_use]
    pub fn metrics(&self) -> Vec<Metric> {
        self.metrics.borrow().clone()
    }

    /// Snapshot of the current clock text.
    #[must_use]
    pub fn clock_text(&self) -> String {
        self.clock_text.borrow().clone()
    }

    #[cfg(test)]
    pub(crate) fn subscribe_clock(&self) -> watch::Receiver<String> {
        self.clock_text.subscribe()
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}
