//! # secdash-app
//!
//! Application layer: the dashboard view state and its clock.
//!
//! ## Responsibilities
//! - [`view::DashboardView`]: instance-owned state (metric list + clock text)
//!   with explicit update entry points
//! - [`ports::Clock`]: where the clock text comes from
//! - [`ticker::ClockTicker`]: the recurring one-second task that refreshes
//!   the clock text, canceled when its handle is dropped
//!
//! ## Dependency rule
//! Depends on `secdash-domain` only (plus `tokio` for the timer and
//! watch channels). Never imports adapter crates.

pub mod ports;
pub mod system_clock;
pub mod ticker;
pub mod view;
