//! # secdash-domain
//!
//! Pure domain model for the security operations dashboard.
//!
//! ## Responsibilities
//! - Define **Metrics** (name, value, status, description)
//! - Map a **status** to its color, icon and CSS class, with a neutral
//!   fallback for labels outside `good`/`warning`/`critical`
//! - Provide the fixed metric **catalog** shown at startup
//! - Hold the static copy of the header, summary and deployment panels
//! - Format the live clock text
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Both the native application layer and the WASM dashboard build on it.

pub mod catalog;
pub mod metric;
pub mod overview;
pub mod time;
