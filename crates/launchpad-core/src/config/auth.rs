//! Token signing configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Placeholder secret shipped in the defaults. Startup warns while it is in use.
pub const PLACEHOLDER_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Session token signing configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    #[serde(default = "default_session_secret")]
    pub session_secret: String,
}

impl AuthConfig {
    /// Whether the shipped placeholder secret is still configured.
    pub fn uses_placeholder_secret(&self) -> bool {
        self.session_secret == PLACEHOLDER_SECRET
    }

    pub(crate) fn validate(&self) -> Result<(), AppError> {
        if self.session_secret.is_empty() {
            return Err(AppError::configuration("auth.session_secret must not be empty"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: default_session_secret(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_secret", &"<redacted>")
            .finish()
    }
}

fn default_session_secret() -> String {
    PLACEHOLDER_SECRET.to_string()
}
