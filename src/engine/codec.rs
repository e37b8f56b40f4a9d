use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::engine::core::compression::{
    CompressionCodec, GzipCodec, ZstdCodec, decompress_with_fallback,
};
use crate::engine::core::container::{
    DEFAULT_MAX_RECORDS, decode_container_with_limit, encode_container,
};
use crate::engine::core::normalize::{NormalizeSummary, normalize};
use crate::engine::errors::CodecError;
use crate::engine::types::{Content, FormatVersion};
use crate::shared::config::CodecConfig;

/// Counters describing one encode call.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeStats {
    pub version: FormatVersion,
    pub normalize: NormalizeSummary,
    pub numeric_columns: BTreeSet<usize>,
    pub dictionary_len: usize,
    pub item_count: usize,
    pub container_len: usize,
    pub compressed_len: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncodedContainer {
    pub bytes: Vec<u8>,
    pub stats: EncodeStats,
}

/// Normalize, assemble and compress in one place.
///
/// Version 2 containers go through the current compressor. Version 1
/// containers are written with the legacy one, the same pairing older
/// files were produced with. Decoding accepts either compressor for
/// either version.
pub struct Codec {
    current: Box<dyn CompressionCodec>,
    legacy: Box<dyn CompressionCodec>,
    version: FormatVersion,
    max_records: usize,
}

impl Default for Codec {
    fn default() -> Self {
        Self {
            current: Box::new(ZstdCodec::default()),
            legacy: Box::new(GzipCodec::default()),
            version: FormatVersion::CURRENT,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}

impl Codec {
    pub fn new(
        current: Box<dyn CompressionCodec>,
        legacy: Box<dyn CompressionCodec>,
        version: FormatVersion,
    ) -> Self {
        Self {
            current,
            legacy,
            version,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }

    pub fn from_config(cfg: &CodecConfig) -> Self {
        Self::new(
            Box::new(ZstdCodec {
                level: cfg.compression_level,
            }),
            Box::new(GzipCodec {
                level: cfg.legacy_compression_level,
            }),
            cfg.write_version,
        )
        .with_max_records(cfg.max_records)
    }

    pub fn with_version(mut self, version: FormatVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    pub fn version(&self) -> FormatVersion {
        self.version
    }

    pub fn encode(&self, content: Content) -> Result<EncodedContainer, CodecError> {
        let (content, summary) = normalize(content);
        let body = encode_container(&content, self.version)?;

        let compressor = match self.version {
            FormatVersion::V2 => self.current.as_ref(),
            FormatVersion::V1 => self.legacy.as_ref(),
        };
        let bytes = compressor.compress(&body.bytes)?;

        let stats = EncodeStats {
            version: self.version,
            normalize: summary,
            numeric_columns: body.numeric_columns,
            dictionary_len: body.dictionary_len,
            item_count: body.item_count,
            container_len: body.bytes.len(),
            compressed_len: bytes.len(),
        };

        info!(
            target: "codec::encode",
            version = %self.version,
            kind = %content.kind(),
            records = stats.normalize.kept_records,
            removed = stats.normalize.removed(),
            compressor = compressor.name(),
            container_len = stats.container_len,
            compressed_len = stats.compressed_len,
            "Encoded content"
        );
        Ok(EncodedContainer { bytes, stats })
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Content, CodecError> {
        let container =
            decompress_with_fallback(self.current.as_ref(), self.legacy.as_ref(), bytes)?;
        let content = decode_container_with_limit(&container, self.max_records)?;

        debug!(
            target: "codec::decode",
            compressed_len = bytes.len(),
            container_len = container.len(),
            kind = %content.kind(),
            records = content.len(),
            "Decoded content"
        );
        Ok(content)
    }
}

/// Encodes with the default compressors and the current format version.
pub fn encode(content: Content) -> Result<Vec<u8>, CodecError> {
    Codec::default().encode(content).map(|encoded| encoded.bytes)
}

pub fn decode(bytes: &[u8]) -> Result<Content, CodecError> {
    Codec::default().decode(bytes)
}
