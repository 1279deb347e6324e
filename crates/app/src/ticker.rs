//! Recurring clock refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::ports::Clock;
use crate::view::DashboardView;

/// Period of the header clock refresh.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Handle to the task that refreshes a view's clock text.
///
/// The first refresh happens one period after [`start`](Self::start), then
/// once per period. Ticks run one after another on a single task, so two
/// refreshes never overlap. Dropping the handle aborts the task; no refresh
/// runs after that.
///
/// Must be created inside a tokio runtime.
pub struct ClockTicker {
    handle: JoinHandle<()>,
}

impl ClockTicker {
    /// Spawn the refresh task for `view`.
    pub fn start<C>(view: Arc<DashboardView>, clock: C, period: Duration) -> Self
    where
        C: Clock + Send + 'static,
    {
        tracing::debug!(period_ms = period.as_millis(), "clock ticker started");

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let text = clock.now_text();
                tracing::trace!(%text, "clock tick");
                view.set_clock_text(text);
            }
        });

        Self { handle }
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancel the refresh task. Same as dropping the handle.
    pub fn stop(self) {}
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("clock ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Clock returning `tick-1`, `tick-2`, … and counting its calls.
    #[derive(Clone, Default)]
    struct CountingClock {
        calls: Arc<AtomicUsize>,
    }

    impl CountingClock {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Clock for CountingClock {
        fn now_text(&self) -> String {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            format!("tick-{n}")
        }
    }

    fn sleep_ms(ms: u64) -> tokio::time::Sleep {
        tokio::time::sleep(Duration::from_millis(ms))
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_update_before_first_period() {
        let view = Arc::new(DashboardView::initialized());
        let clock = CountingClock::default();
        let _ticker = ClockTicker::start(Arc::clone(&view), clock.clone(), DEFAULT_PERIOD);

        sleep_ms(999).await;

        assert_eq!(clock.calls(), 0);
        assert_eq!(view.clock_text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn should_update_within_1100ms_window() {
        let view = Arc::new(DashboardView::initialized());
        let clock = CountingClock::default();
        let _ticker = ClockTicker::start(Arc::clone(&view), clock.clone(), DEFAULT_PERIOD);

        sleep_ms(1100).await;

        assert_eq!(view.clock_text(), "tick-1");
    }

    #[tokio::test(start_paused = true)]
    async fn should_fire_once_per_completed_period() {
        let view = Arc::new(DashboardView::initialized());
        let clock = CountingClock::default();
        let _ticker = ClockTicker::start(Arc::clone(&view), clock.clone(), DEFAULT_PERIOD);

        sleep_ms(3500).await;

        assert_eq!(clock.calls(), 3);
        assert_eq!(view.clock_text(), "tick-3");
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_updating_after_drop() {
        let view = Arc::new(DashboardView::initialized());
        let clock = CountingClock::default();
        let ticker = ClockTicker::start(Arc::clone(&view), clock.clone(), DEFAULT_PERIOD);

        sleep_ms(2500).await;
        drop(ticker);
        sleep_ms(5000).await;

        assert_eq!(clock.calls(), 2);
        assert_eq!(view.clock_text(), "tick-2");
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_updating_after_stop() {
        let view = Arc::new(DashboardView::initialized());
        let clock = CountingClock::default();
        let ticker = ClockTicker::start(Arc::clone(&view), clock.clone(), DEFAULT_PERIOD);
        assert!(ticker.is_running());

        ticker.stop();
        sleep_ms(3000).await;

        assert_eq!(clock.calls(), 0);
        assert_eq!(view.clock_text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn should_notify_subscriber_on_each_tick() {
        let view = Arc::new(DashboardView::initialized());
        let mut rx = view.subscribe_clock();
        let _ticker = ClockTicker::start(Arc::clone(&view), CountingClock::default(), DEFAULT_PERIOD);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "tick-1");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "tick-2");
    }

    #[tokio::test(start_paused = true)]
    async fn should_work_with_system_clock() {
        let view = Arc::new(DashboardView::initialized());
        let _ticker = ClockTicker::start(
            Arc::clone(&view),
            crate::system_clock::SystemClock,
            DEFAULT_PERIOD,
        );

        sleep_ms(1100).await;

        assert!(!view.clock_text().is_empty());
    }
}
