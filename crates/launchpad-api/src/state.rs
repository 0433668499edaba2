//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use launchpad_auth::guard::SessionGuard;
use launchpad_auth::jwt::JwtSessionCodec;
use launchpad_core::config::AppConfig;
use launchpad_core::result::AppResult;
use launchpad_core::traits::{Clock, SystemClock};

/// Application state passed to handlers and middleware via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session guard shared by every request
    pub session_guard: Arc<SessionGuard>,
}

impl AppState {
    /// Builds state with the JWT codec and the system clock.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Builds state with the JWT codec and the given clock.
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let codec = Arc::new(JwtSessionCodec::new(&config.auth, Arc::clone(&clock)));
        let guard = SessionGuard::new(&config.session, codec, clock)?;
        Ok(Self::with_guard(config, guard))
    }

    /// Builds state around an existing guard.
    pub fn with_guard(config: AppConfig, guard: SessionGuard) -> Self {
        Self {
            config: Arc::new(config),
            session_guard: Arc::new(guard),
        }
    }
}
