//! [`TokenCodec`] implementation backed by HS256 JWTs.

use std::sync::Arc;

use async_trait::async_trait;

use launchpad_core::config::AuthConfig;
use launchpad_core::error::VerificationError;
use launchpad_core::result::AppResult;
use launchpad_core::traits::{Clock, TokenCodec};
use launchpad_core::types::SessionPayload;

use super::decoder::SessionTokenDecoder;
use super::encoder::SessionTokenEncoder;

/// Session token codec combining the encoder and decoder.
#[derive(Debug, Clone)]
pub struct JwtSessionCodec {
    encoder: SessionTokenEncoder,
    decoder: SessionTokenDecoder,
}

impl JwtSessionCodec {
    /// Creates a codec sharing one secret for signing and verification.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoder: SessionTokenEncoder::new(config),
            decoder: SessionTokenDecoder::new(config, clock),
        }
    }
}

#[async_trait]
impl TokenCodec for JwtSessionCodec {
    async fn sign(&self, payload: &SessionPayload) -> AppResult<String> {
        self.encoder.encode(payload)
    }

    async fn verify(&self, token: &str) -> Result<SessionPayload, VerificationError> {
        self.decoder.decode(token)
    }
}
