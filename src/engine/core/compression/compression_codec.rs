use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tracing::{debug, warn};

use crate::engine::errors::CodecError;

pub const DEFAULT_ZSTD_LEVEL: i32 = 19;
pub const DEFAULT_GZIP_LEVEL: u32 = 9;

/// Final, format-agnostic compression applied to an assembled container.
pub trait CompressionCodec: Send + Sync {
    fn name(&self) -> &'static str;
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError>;
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// Codec used for newly written files.
#[derive(Debug, Clone, Copy)]
pub struct ZstdCodec {
    pub level: i32,
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZSTD_LEVEL,
        }
    }
}

impl CompressionCodec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::encode_all(input, self.level)
            .map_err(|e| CodecError::Compression(format!("zstd compress: {e}")))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::decode_all(input).map_err(CodecError::Io)
    }
}

/// Codec of the first container generation, kept for reading old files.
#[derive(Debug, Clone, Copy)]
pub struct GzipCodec {
    pub level: u32,
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_GZIP_LEVEL,
        }
    }
}

impl CompressionCodec for GzipCodec {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.level));
        encoder
            .write_all(input)
            .map_err(|e| CodecError::Compression(format!("gzip compress: {e}")))?;
        encoder
            .finish()
            .map_err(|e| CodecError::Compression(format!("gzip compress: {e}")))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        GzDecoder::new(input).read_to_end(&mut out)?;
        Ok(out)
    }
}

/// Tries `current`, then `legacy`. Fails only when neither accepts the bytes.
pub fn decompress_with_fallback(
    current: &dyn CompressionCodec,
    legacy: &dyn CompressionCodec,
    input: &[u8],
) -> Result<Vec<u8>, CodecError> {
    let current_err = match current.decompress(input) {
        Ok(out) => {
            debug!(
                target: "compression::decompress_with_fallback",
                codec = current.name(),
                compressed_size = input.len(),
                decompressed_size = out.len(),
                "Decompressed with current codec"
            );
            return Ok(out);
        }
        Err(e) => e,
    };

    match legacy.decompress(input) {
        Ok(out) => {
            warn!(
                target: "compression::decompress_with_fallback",
                current = current.name(),
                legacy = legacy.name(),
                error = %current_err,
                "Current codec rejected input, decompressed with legacy codec"
            );
            Ok(out)
        }
        Err(legacy_err) => Err(CodecError::Decompression {
            current: format!("{}: {}", current.name(), current_err),
            legacy: format!("{}: {}", legacy.name(), legacy_err),
        }),
    }
}
