//! Core traits defined in `launchpad-core` and implemented by other crates.

pub mod clock;
pub mod token_codec;

pub use clock::{Clock, FixedClock, SystemClock};
pub use token_codec::TokenCodec;
