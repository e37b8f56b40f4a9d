pub mod codec;
pub mod core;
pub mod errors;
pub mod types;

pub use codec::{Codec, EncodeStats, EncodedContainer, decode, encode};
pub use errors::*;
