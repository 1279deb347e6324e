//! # secdashd: security dashboard daemon
//!
//! Composition root that wires the dashboard together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`secdash.toml` + environment overrides)
//! - Initialize `tracing` logging
//! - Create the dashboard view with its fixed metrics
//! - Start the clock ticker and stop it on every exit path
//! - Build the axum router, bind and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use secdash_adapter_http_axum::router;
use secdash_adapter_http_axum::state::AppState;
use secdash_app::system_clock::SystemClock;
use secdash_app::ticker::ClockTicker;
use secdash_app::view::DashboardView;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // View + clock
    let view = Arc::new(DashboardView::initialized());
    let ticker = ClockTicker::start(Arc::clone(&view), SystemClock, config.tick_period());

    // HTTP
    let state = AppState::new(Arc::clone(&view), config.dashboard.refresh_seconds);
    let app = router::build(state, config.bundle_dir());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "secdashd listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    ticker.stop();
    tracing::info!("secdashd stopped");
    served?;

    Ok(())
}

/// Resolve on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
