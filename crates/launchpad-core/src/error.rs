//! Error types shared by the Launchpad crates.
//!
//! Fallible operations return [`AppError`]. Token verification is the
//! exception: it reports the opaque [`VerificationError`] so callers
//! cannot branch on why a token was rejected.

use std::fmt;

use thiserror::Error;

/// Category of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// No usable session, or a token was rejected.
    Authentication,
    /// Caller-supplied input was unusable.
    Validation,
    /// Signing, I/O or another server-side failure.
    Internal,
    /// Configuration could not be loaded or is inconsistent.
    Configuration,
    /// JSON encoding or decoding failed.
    Serialization,
}

impl ErrorKind {
    /// Stable machine-readable code, also used in API error bodies.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Authentication => "UNAUTHORIZED",
            Self::Validation => "VALIDATION_ERROR",
            Self::Internal => "INTERNAL_ERROR",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::Serialization => "SERIALIZATION_ERROR",
        }
    }

    /// Whether the error was caused by the caller rather than the server.
    pub const fn is_client_error(self) -> bool {
        matches!(self, Self::Authentication | Self::Validation)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Application error: a kind, a message and an optional cause.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying cause.
    pub fn caused_by(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Serialization, format!("JSON error: {err}")).caused_by(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(format!("I/O error: {err}")).caused_by(err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(format!("Failed to load configuration: {err}")).caused_by(err)
    }
}

/// A session token was rejected.
///
/// Malformed structure, bad signature and elapsed expiry all produce this
/// same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("session token verification failed")]
pub struct VerificationError;

impl From<VerificationError> for AppError {
    fn from(err: VerificationError) -> Self {
        Self::authentication("Invalid session token").caused_by(err)
    }
}
