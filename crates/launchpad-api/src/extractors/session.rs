//! `CurrentSession` extractor for the payload the session guard just refreshed.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use launchpad_core::error::AppError;
use launchpad_core::types::SessionPayload;

use crate::error::ApiError;

/// Verified session of the current request.
///
/// Present only when the guard verified and refreshed the session cookie on
/// this request (a `GET` carrying a valid cookie).
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSession(pub SessionPayload);

impl CurrentSession {
    /// Identifier of the signed-in principal.
    pub fn subject(&self) -> &str {
        &self.0.subject
    }
}

impl std::ops::Deref for CurrentSession {
    type Target = SessionPayload;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .ok_or_else(|| AppError::authentication("No active session").into())
    }
}

impl<S> OptionalFromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<CurrentSession>().cloned())
    }
}
