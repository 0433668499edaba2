//! Session token signing.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use launchpad_core::config::AuthConfig;
use launchpad_core::error::AppError;
use launchpad_core::types::SessionPayload;

/// Signs session payloads into HS256 JWTs.
///
/// The JWT claims are exactly the payload object; nothing is added, so a
/// verified payload signed again keeps every claim it arrived with.
#[derive(Clone)]
pub struct SessionTokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    header: Header,
}

impl std::fmt::Debug for SessionTokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenEncoder")
            .field("algorithm", &self.header.alg)
            .finish()
    }
}

impl SessionTokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
        }
    }

    /// Signs `payload` into a compact JWT.
    pub fn encode(&self, payload: &SessionPayload) -> Result<String, AppError> {
        encode(&self.header, payload, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }
}
