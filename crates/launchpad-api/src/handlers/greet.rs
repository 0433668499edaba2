//! Cloud greeting endpoints. They live under `/api`, outside the session guard.

use axum::Json;
use axum::body::Bytes;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use launchpad_core::types::session::iso8601;

use crate::dto::request::{GreetQuery, GreetRequest};
use crate::dto::response::{GreetError, GreetResponse};

const SERVICE_NAME: &str = "cloud-greet-service";
const DEFAULT_GREETING: &str = "hi";

/// GET /api/cloud/greet
pub async fn greet(Query(query): Query<GreetQuery>) -> Json<GreetResponse> {
    let greeting = query
        .greeting
        .filter(|g| !g.is_empty())
        .unwrap_or_else(|| DEFAULT_GREETING.to_string());

    Json(respond(format!("Howdy! {greeting} cloud!")))
}

/// POST /api/cloud/greet
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn greet_named(body: Bytes) -> Response {
    let body: GreetRequest = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected greet body");
            let error = GreetError {
                error: "Invalid request body".to_string(),
            };
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let greeting = body
        .greeting
        .unwrap_or_else(|| DEFAULT_GREETING.to_string());
    let message = match body.name.filter(|n| !n.is_empty()) {
        Some(name) => format!("Howdy, {name}! {greeting} cloud!"),
        None => format!("Howdy! {greeting} cloud!"),
    };

    Json(respond(message)).into_response()
}

fn respond(message: String) -> GreetResponse {
    GreetResponse {
        message,
        timestamp: iso8601::format(&Utc::now()),
        service: SERVICE_NAME.to_string(),
    }
}
