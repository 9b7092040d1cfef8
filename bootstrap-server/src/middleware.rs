use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::routes::paths;

/// Request timing middleware
pub async fn request_timing_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let correlation_id = request
        .headers()
        .get(paths::CORRELATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        correlation_id = %correlation_id,
        duration_ms = start.elapsed().as_millis(),
        status = response.status().as_u16(),
        "Request processed"
    );

    response
}
