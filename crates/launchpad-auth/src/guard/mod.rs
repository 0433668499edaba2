//! Request-time session guard.
//!
//! The guard classifies a request path, verifies the session cookie through
//! a [`TokenCodec`](launchpad_core::traits::TokenCodec), and returns a
//! [`GuardDecision`] that the HTTP layer applies to the response.

pub mod decision;
pub mod session_guard;

pub use decision::{GuardDecision, RefreshedSession};
pub use session_guard::SessionGuard;
