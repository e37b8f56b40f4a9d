pub mod compression_codec;

pub use compression_codec::{
    CompressionCodec, DEFAULT_GZIP_LEVEL, DEFAULT_ZSTD_LEVEL, GzipCodec, ZstdCodec,
    decompress_with_fallback,
};
