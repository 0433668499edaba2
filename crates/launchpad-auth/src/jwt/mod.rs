//! JWT session token encoding, decoding, and the combined codec.

pub mod codec;
pub mod decoder;
pub mod encoder;

pub use codec::JwtSessionCodec;
pub use decoder::SessionTokenDecoder;
pub use encoder::SessionTokenEncoder;
