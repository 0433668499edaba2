//! Convenience result type alias for Launchpad.

use crate::error::AppError;

/// A specialized `Result` type for Launchpad operations.
pub type AppResult<T> = Result<T, AppError>;
