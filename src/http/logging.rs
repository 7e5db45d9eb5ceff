//! Request logging middleware.
//!
//! Emits one structured event per request with method, path, status, and
//! latency. Client errors log at warn and server errors at error so failure
//! triage can filter on level alone.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs every request once its response is ready.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    if response.status().is_server_error() {
        tracing::error!(%method, path = %path, status, latency_ms, "request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, path = %path, status, latency_ms, "request rejected");
    } else {
        tracing::info!(%method, path = %path, status, latency_ms, "request completed");
    }

    response
}
