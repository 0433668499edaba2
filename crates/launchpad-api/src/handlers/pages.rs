//! Placeholder page handlers.
//!
//! Rendering is out of scope; these exist so the session guard has real
//! destinations to forward to.

use axum::http::StatusCode;

use crate::extractors::CurrentSession;

/// GET /
pub async fn home() -> &'static str {
    "Launchpad"
}

/// GET /pricing
pub async fn pricing() -> &'static str {
    "Pricing"
}

/// GET /sign-in
pub async fn sign_in() -> &'static str {
    "Sign in"
}

/// GET /sign-up
pub async fn sign_up() -> &'static str {
    "Sign up"
}

/// GET /dashboard
pub async fn dashboard(session: Option<CurrentSession>) -> String {
    page("Dashboard", session.as_ref())
}

/// GET /dashboard/general
pub async fn general(session: Option<CurrentSession>) -> String {
    page("General settings", session.as_ref())
}

/// POST /dashboard/general
pub async fn update_general() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// GET /dashboard/security
pub async fn security(session: Option<CurrentSession>) -> String {
    page("Security", session.as_ref())
}

/// GET /dashboard/activity
pub async fn activity(session: Option<CurrentSession>) -> String {
    page("Activity", session.as_ref())
}

/// Fallback for unknown paths
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

fn page(title: &str, session: Option<&CurrentSession>) -> String {
    match session {
        Some(session) => format!("{title} for {}", session.subject()),
        None => title.to_string(),
    }
}
