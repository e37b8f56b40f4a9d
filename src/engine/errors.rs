use thiserror::Error;
use tracing::{debug, error};

/// Errors raised while encoding or decoding a MIN container.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Format error at offset {offset}: {kind}")]
    Format { offset: usize, kind: FormatErrorKind },

    #[error("Truncated input at offset {offset}: {field} needs {needed} more byte(s)")]
    Truncated {
        offset: usize,
        field: &'static str,
        needed: usize,
    },

    #[error("Decompression failed (current codec: {current}; legacy codec: {legacy})")]
    Decompression { current: String, legacy: String },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Compression failed: {0}")]
    Compression(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The specific structural problem behind a [`CodecError::Format`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatErrorKind {
    #[error("bad magic {found:02X?}")]
    BadMagic { found: Vec<u8> },

    #[error("unsupported version {0}")]
    UnknownVersion(u8),

    #[error("unknown content kind 0x{0:02X}")]
    UnknownContentKind(u8),

    #[error("unknown item marker 0x{0:02X}")]
    UnknownItemMarker(u8),

    #[error("unknown cell tag 0x{0:02X}")]
    UnknownCellTag(u8),

    #[error("cell tag 0x{0:02X} is not allowed in a version 1 container")]
    TagNotInVersion1(u8),

    #[error("varint longer than {0} groups")]
    VarintOverflow(usize),

    #[error("dictionary index {index} out of range ({len} entries)")]
    DictionaryIndexOutOfRange { index: u64, len: usize },

    #[error("delta cell in column {column:?} has no numeric base value")]
    UnresolvableDelta { column: Option<usize> },

    #[error("repeat count {0} is below 2")]
    InvalidRepeatCount(u64),

    #[error("container expands past {limit} records")]
    RecordLimitExceeded { limit: usize },

    #[error("{0} trailing byte(s) after the last item")]
    TrailingBytes(usize),
}

impl CodecError {
    pub fn format(offset: usize, kind: FormatErrorKind) -> Self {
        CodecError::Format { offset, kind }
    }

    pub fn log_error(&self) {
        match self {
            CodecError::Format { offset, kind } => {
                error!("Format error at offset {}: {}", offset, kind);
                debug!("Format error details: {:?}", kind);
            }
            CodecError::Truncated {
                offset,
                field,
                needed,
            } => {
                error!("Truncated input while reading {}", field);
                debug!(
                    "Truncated input details: offset={}, needed={}",
                    offset, needed
                );
            }
            CodecError::Decompression { current, legacy } => {
                error!("Decompression failed with both codecs");
                debug!(
                    "Decompression error details: current={}, legacy={}",
                    current, legacy
                );
            }
            CodecError::Encoding(e) => {
                error!("Encoding error: {}", e);
                debug!("Encoding error details: {}", e);
            }
            CodecError::Compression(e) => {
                error!("Compression failed: {}", e);
                debug!("Compression error details: {}", e);
            }
            CodecError::Io(e) => {
                error!("IO error: {}", e);
                debug!("IO error details: {:?}", e);
            }
        }
    }
}
