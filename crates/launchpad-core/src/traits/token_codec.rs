//! Token codec trait consumed by the session guard.

use async_trait::async_trait;

use crate::error::VerificationError;
use crate::result::AppResult;
use crate::types::SessionPayload;

/// Signs session payloads into opaque tokens and verifies them back.
///
/// Implementations may perform asynchronous work (key retrieval, remote
/// signing). Callers await both operations before acting on the result.
#[async_trait]
pub trait TokenCodec: Send + Sync + std::fmt::Debug + 'static {
    /// Signs `payload` into a tamper-evident token.
    ///
    /// Fails only if the payload cannot be encoded.
    async fn sign(&self, payload: &SessionPayload) -> AppResult<String>;

    /// Verifies `token` and decodes its payload.
    ///
    /// Every rejection (bad signature, malformed structure, elapsed expiry)
    /// returns the same [`VerificationError`].
    async fn verify(&self, token: &str) -> Result<SessionPayload, VerificationError>;
}
