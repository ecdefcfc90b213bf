use axum::http::{HeaderValue, header};
use axum::{Json, response::IntoResponse};
use homeval_derive::{api_handler, api_model};
use homeval_domain::constants::SYSTEM_TAG;
use std::sync::LazyLock;
use std::time::Instant;

static STARTED: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Liveness report
#[api_model]
struct HealthResponse {
    /// Always `up` while the process answers
    status: &'static str,
    /// Crate version of the running binary
    version: &'static str,
    /// Seconds since the router was built
    uptime: u64,
}

/// Starts the uptime clock; called when the system router is assembled.
pub(super) fn mark_started() {
    LazyLock::force(&STARTED);
}

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Liveness check", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let report = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: STARTED.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
            (header::PRAGMA, HeaderValue::from_static("no-cache")),
        ],
        Json(report),
    )
}
