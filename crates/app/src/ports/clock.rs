//! Clock port: where the header's "now" text comes from.

/// Produces the text shown next to `Last Updated:`.
pub trait Clock {
    /// Current time, already formatted for display.
    fn now_text(&self) -> String;
}

impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now_text(&self) -> String {
        (**self).now_text()
    }
}
