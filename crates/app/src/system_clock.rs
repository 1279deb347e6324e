//! Wall-clock implementation of the [`Clock`] port.

use secdash_domain::time;

use crate::ports::Clock;

/// Reads the local system time on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_text(&self) -> String {
        time::clock_text(&time::now())
    }
}
