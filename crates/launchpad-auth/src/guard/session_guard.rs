//! Session guard decision engine.

use std::sync::Arc;

use tracing::{debug, warn};

use launchpad_core::config::SessionConfig;
use launchpad_core::result::AppResult;
use launchpad_core::traits::{Clock, TokenCodec};
use launchpad_core::types::PathPrefix;

use super::decision::{GuardDecision, RefreshedSession};

/// Method on which sessions are verified and refreshed.
const REFRESH_METHOD: &str = "GET";

/// Gates protected routes and slides the session expiry on navigation.
///
/// Holds only immutable configuration, so one instance is shared by every
/// in-flight request.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    codec: Arc<dyn TokenCodec>,
    clock: Arc<dyn Clock>,
    cookie_name: String,
    sign_in_path: String,
    duration: chrono::Duration,
    protected: Vec<PathPrefix>,
    excluded: Vec<PathPrefix>,
}

impl SessionGuard {
    /// Creates a guard, rejecting session configuration that fails validation.
    pub fn new(
        config: &SessionConfig,
        codec: Arc<dyn TokenCodec>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        config.validate()?;

        Ok(Self {
            codec,
            clock,
            cookie_name: config.cookie_name.clone(),
            sign_in_path: config.sign_in_path.clone(),
            duration: config.duration()?,
            protected: config.protected()?,
            excluded: config.excluded()?,
        })
    }

    /// Name of the session cookie.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Path unauthenticated requests are redirected to.
    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    /// Whether the guard runs on `path` at all.
    pub fn applies_to(&self, path: &str) -> bool {
        !PathPrefix::any_matches(&self.excluded, path)
    }

    /// Whether `path` requires a valid session.
    pub fn is_protected(&self, path: &str) -> bool {
        PathPrefix::any_matches(&self.protected, path)
    }

    /// Decides how to handle a request.
    ///
    /// `session_token` is the raw value of the session cookie, if the
    /// request carried one. Every codec failure leads to the same outcome,
    /// whatever its cause.
    pub async fn evaluate(
        &self,
        path: &str,
        method: &str,
        session_token: Option<&str>,
    ) -> GuardDecision {
        let protected = self.is_protected(path);

        let token = match session_token {
            Some(token) => token,
            None if protected => {
                debug!(path, "No session on protected route, redirecting to sign-in");
                return GuardDecision::Redirect {
                    clear_cookie: false,
                };
            }
            None => return GuardDecision::Continue,
        };

        if method != REFRESH_METHOD {
            return GuardDecision::Continue;
        }

        match self.refresh(token).await {
            Ok(refreshed) => {
                debug!(
                    path,
                    subject = %refreshed.payload.subject,
                    expires_at = %refreshed.expires_at(),
                    "Session refreshed"
                );
                GuardDecision::Refresh(refreshed)
            }
            Err(e) => {
                warn!(path, protected, error = %e, "Session refresh failed, clearing cookie");
                if protected {
                    GuardDecision::Redirect { clear_cookie: true }
                } else {
                    GuardDecision::ClearAndContinue
                }
            }
        }
    }

    /// Verifies `token` and re-signs its payload with a fresh expiry.
    async fn refresh(&self, token: &str) -> AppResult<RefreshedSession> {
        let payload = self.codec.verify(token).await?;
        let payload = payload.with_expiry(self.clock.now() + self.duration);
        let token = self.codec.sign(&payload).await?;

        Ok(RefreshedSession { token, payload })
    }
}
