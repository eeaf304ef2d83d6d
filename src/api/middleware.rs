//! API Middleware (Request ids, Logging)

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, Instrument};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware
///
/// Tags each request with an id (reusing the caller's `x-request-id` when
/// present), echoes it on the response, and logs the outcome. Bodies are
/// never logged; they carry visitor contact details.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map(|v| v.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let span = tracing::info_span!("request", id = %request_id);
    let mut response = next.run(request).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    let latency = start.elapsed();
    let status = response.status();

    span.in_scope(|| {
        info!(
            method = %method,
            uri = %uri.path(),
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "Request completed"
        )
    });

    response
}
