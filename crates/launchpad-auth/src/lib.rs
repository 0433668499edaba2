//! # launchpad-auth
//!
//! Session token signing and the request-time session guard.
//!
//! ## Modules
//!
//! - `jwt`: HS256 session token encoder, decoder, and the combined codec
//! - `guard`: route classification and the allow / refresh / redirect decision

pub mod guard;
pub mod jwt;

pub use guard::{GuardDecision, RefreshedSession, SessionGuard};
pub use jwt::{JwtSessionCodec, SessionTokenDecoder, SessionTokenEncoder};
