pub mod decoder;
pub mod encoder;
pub mod header;
pub mod item_marker;

pub use decoder::{DEFAULT_MAX_RECORDS, decode_container, decode_container_with_limit};
pub use encoder::{EncodedBody, encode_container};
pub use header::{ContainerHeader, MAGIC};
pub use item_marker::ItemMarker;
