//! Browser-side clock for the dashboard header.

use std::time::Duration;

use leptos::prelude::*;
use secdash_domain::time;

/// Refresh period of the header clock.
const TICK: Duration = Duration::from_millis(1000);

/// Start a one-second interval writing the formatted local time into a signal.
///
/// The signal starts empty and is first written one period after mount.
/// The interval is cleared when the owning component is unmounted. If the
/// browser refuses the interval, the clock stays empty and a warning is
/// logged.
pub fn use_clock_text() -> ReadSignal<String> {
    let (clock_text, set_clock_text) = signal(String::new());
    start_clock(TICK, move |text| set_clock_text.set(text));
    clock_text
}

/// Call `on_tick` with the formatted local time every `period` until the
/// current reactive owner is cleaned up.
fn start_clock(period: Duration, on_tick: impl Fn(String) + 'static) {
    let tick = move || on_tick(time::clock_text(&time::now()));

    match set_interval_with_handle(tick, period) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => leptos::logging::warn!("failed to start clock interval: {err:?}"),
    }
}
