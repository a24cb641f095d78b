//! Request ID Middleware
//!
//! Tags every request with an ID for tracing and debugging.
//! The request ID is:
//! - Added to response headers (X-Request-ID)
//! - Made current for the request so error bodies can report it
//! - Recorded on the request span for log correlation

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::shared::request_context::with_request_id;

/// Header name for request ID
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Reuses an incoming X-Request-ID header, otherwise generates a UUID
pub async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), ToString::to_string);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    );

    let handled = async move {
        tracing::debug!("Processing request");
        next.run(request).await
    }
    .instrument(span);

    let mut response = with_request_id(request_id.clone(), handled).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), header_value);
    }

    response
}
