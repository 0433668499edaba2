//! Outcomes of evaluating a request against the session guard.

use chrono::{DateTime, Utc};

use launchpad_core::types::SessionPayload;

/// A session that was verified and re-signed with a new expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshedSession {
    /// The newly signed token to store in the session cookie.
    pub token: String,
    /// The payload that `token` encodes.
    pub payload: SessionPayload,
}

impl RefreshedSession {
    /// Expiry of the refreshed session, also used as the cookie `Expires`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.payload.expires_at
    }
}

/// What the HTTP layer must do with a request.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Forward the request; leave the response untouched.
    Continue,
    /// Forward the request and replace the session cookie.
    Refresh(RefreshedSession),
    /// Forward the request and delete the session cookie.
    ClearAndContinue,
    /// Do not forward; redirect to the sign-in path.
    Redirect {
        /// Whether the response must also delete the session cookie.
        clear_cookie: bool,
    },
}

impl GuardDecision {
    /// Whether the request must not reach its destination handler.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    /// Whether the response must carry a session cookie removal.
    pub fn clears_cookie(&self) -> bool {
        matches!(
            self,
            Self::ClearAndContinue | Self::Redirect { clear_cookie: true }
        )
    }
}
