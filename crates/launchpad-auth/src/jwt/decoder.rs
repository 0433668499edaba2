//! Session token validation.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use launchpad_core::config::AuthConfig;
use launchpad_core::error::VerificationError;
use launchpad_core::traits::Clock;
use launchpad_core::types::SessionPayload;

/// Verifies session tokens and decodes their payload.
#[derive(Clone)]
pub struct SessionTokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionTokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenDecoder")
            .field("validation", &self.validation)
            .field("clock", &self.clock)
            .finish()
    }
}

impl SessionTokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        // Expiry lives in the payload's `expires` claim, not in `exp`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            validation,
            clock,
        }
    }

    /// Decodes and validates a session token.
    ///
    /// Checks:
    /// 1. Signature validity (HS256 only)
    /// 2. Payload structure (`sub`, RFC 3339 `expires`)
    /// 3. `expires` is still in the future
    ///
    /// The rejection reason is logged here and then dropped.
    pub fn decode(&self, token: &str) -> Result<SessionPayload, VerificationError> {
        let token_data = decode::<SessionPayload>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(reason = %e, "Session token rejected");
                VerificationError
            })?;

        let payload = token_data.claims;
        if payload.is_expired_at(self.clock.now()) {
            debug!(
                expires_at = %payload.expires_at,
                "Session token rejected: expired"
            );
            return Err(VerificationError);
        }

        Ok(payload)
    }
}
