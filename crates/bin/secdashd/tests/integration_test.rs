//! End-to-end smoke tests for the full secdashd stack.
//!
//! Each test wires the real view, clock ticker and axum router and exercises
//! the HTTP layer via `tower::ServiceExt::oneshot`. No TCP port is bound.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use secdash_adapter_http_axum::router;
use secdash_adapter_http_axum::state::AppState;
use secdash_app::ports::Clock;
use secdash_app::ticker::{ClockTicker, DEFAULT_PERIOD};
use secdash_app::view::DashboardView;
use tower::ServiceExt;

struct FixedClock;

impl Clock for FixedClock {
    fn now_text(&self) -> String {
        "Monday 9:00:00 AM".to_string()
    }
}

fn app(view: &Arc<DashboardView>) -> axum::Router {
    router::build(AppState::new(Arc::clone(view), 5), None)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let view = Arc::new(DashboardView::initialized());
    let (status, body) = get(app(&view), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Dashboard page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_all_metric_cards() {
    let view = Arc::new(DashboardView::initialized());
    let (status, body) = get(app(&view), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"metric-card\"").count(), 4);
    assert!(body.contains("Failed Login Attempts"));
    assert!(body.contains("Firewall Rules Updated"));
}

#[tokio::test(start_paused = true)]
async fn should_show_empty_timestamp_before_first_tick() {
    let view = Arc::new(DashboardView::initialized());
    let _ticker = ClockTicker::start(Arc::clone(&view), FixedClock, DEFAULT_PERIOD);

    let (_, body) = get(app(&view), "/").await;

    assert!(body.contains("Last Updated: </p>"));
}

#[tokio::test(start_paused = true)]
async fn should_show_ticked_timestamp() {
    let view = Arc::new(DashboardView::initialized());
    let _ticker = ClockTicker::start(Arc::clone(&view), FixedClock, DEFAULT_PERIOD);

    tokio::time::sleep(Duration::from_millis(1100)).await;
    let (_, body) = get(app(&view), "/").await;

    assert!(body.contains("Last Updated: Monday 9:00:00 AM"));
}

#[tokio::test(start_paused = true)]
async fn should_keep_last_timestamp_after_ticker_stops() {
    let view = Arc::new(DashboardView::initialized());
    let ticker = ClockTicker::start(Arc::clone(&view), FixedClock, DEFAULT_PERIOD);

    tokio::time::sleep(Duration::from_millis(1100)).await;
    ticker.stop();
    view.set_clock_text("frozen".to_string());
    tokio::time::sleep(Duration::from_secs(3)).await;

    let (_, body) = get(app(&view), "/").await;
    assert!(body.contains("Last Updated: frozen"));
}
