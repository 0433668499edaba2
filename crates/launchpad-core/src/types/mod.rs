//! Shared domain types.

pub mod path;
pub mod session;

pub use path::PathPrefix;
pub use session::SessionPayload;
