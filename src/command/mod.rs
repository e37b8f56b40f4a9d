pub mod handlers;
pub mod types;

pub use handlers::compress::compress_file;
pub use handlers::decompress::decompress_file;
pub use types::{CompressReport, DecompressReport};
