//! Access logging middleware.

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// Log method, path and arrival time of every request, then its outcome.
pub async fn access_log_middleware(req: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tracing::info!(
        method = %method,
        path = %path,
        timestamp = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "Request received"
    );

    let response = next.run(req).await;

    tracing::debug!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}
