//! Route definitions for the Launchpad HTTP server.
//!
//! Pages are mounted at the root and sit behind the session guard; the JSON
//! API is nested under `/api`, which the guard's exclusions skip.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(marketing_routes())
        .merge(dashboard_routes())
        .nest("/api", api_routes())
        .fallback(handlers::pages::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::session_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Public pages
fn marketing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/pricing", get(handlers::pages::pricing))
        .route("/sign-in", get(handlers::pages::sign_in))
        .route("/sign-up", get(handlers::pages::sign_up))
}

/// Pages that require a session
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::pages::dashboard))
        .route(
            "/dashboard/general",
            get(handlers::pages::general).post(handlers::pages::update_general),
        )
        .route("/dashboard/security", get(handlers::pages::security))
        .route("/dashboard/activity", get(handlers::pages::activity))
}

/// JSON endpoints
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/cloud/greet",
            get(handlers::greet::greet).post(handlers::greet::greet_named),
        )
}
