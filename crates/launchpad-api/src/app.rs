//! Application builder: wires router, middleware and state into an Axum app.

use axum::Router;

use launchpad_core::config::AppConfig;
use launchpad_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Launchpad server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Launchpad server...");

    if config.auth.uses_placeholder_secret() {
        tracing::warn!(
            "auth.session_secret is the shipped placeholder; set LAUNCHPAD__AUTH__SESSION_SECRET"
        );
    }

    let addr = config.server.bind_address();
    let state = AppState::new(config)?;

    tracing::info!(
        cookie = %state.session_guard.cookie_name(),
        protected = ?state.config.session.protected_prefixes,
        duration_seconds = state.config.session.duration_seconds,
        "Session guard initialized"
    );

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Launchpad server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Launchpad server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
}
