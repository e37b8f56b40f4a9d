pub mod compress;
pub mod content_io;
pub mod decompress;
