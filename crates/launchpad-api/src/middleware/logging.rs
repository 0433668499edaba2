//! Access log middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::middleware::Next;
use axum::response::Response;

/// Emits one access log event per request.
///
/// Redirect targets and whether any cookie was written are recorded so a
/// sign-in bounce or a cookie clear can be traced without debug logging.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let set_cookie = response.headers().contains_key(SET_COOKIE);
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if response.status().is_server_error() {
        tracing::warn!(%method, %path, status, elapsed_ms, set_cookie, "Request failed");
    } else {
        tracing::info!(%method, %path, status, elapsed_ms, set_cookie, location, "Request served");
    }

    response
}
