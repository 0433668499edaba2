//! # launchpad-core
//!
//! Core crate for Launchpad. Contains configuration schemas, the session
//! payload and path-prefix types, the token codec and clock traits,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Launchpad crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, VerificationError};
pub use result::AppResult;
