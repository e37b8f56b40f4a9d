use crate::engine::core::io::BeSliceReader;
use crate::engine::errors::{CodecError, FormatErrorKind};
use crate::engine::types::{ContentKind, FormatVersion};

pub const MAGIC: [u8; 6] = *b"MINFMT";

/// Fixed eight-byte prefix of every container: magic, version, content kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub version: FormatVersion,
    pub kind: ContentKind,
}

impl ContainerHeader {
    pub const LEN: usize = MAGIC.len() + 1 + 1;

    pub fn new(version: FormatVersion, kind: ContentKind) -> Self {
        Self { version, kind }
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&MAGIC);
        buf.push(self.version.into());
        buf.push(self.kind.into());
    }

    pub fn read_from(reader: &mut BeSliceReader<'_>) -> Result<Self, CodecError> {
        let magic = reader.read_array::<6>("magic")?;
        if magic != MAGIC {
            return Err(CodecError::format(
                0,
                FormatErrorKind::BadMagic {
                    found: magic.to_vec(),
                },
            ));
        }

        let offset = reader.position();
        let version = FormatVersion::try_from(reader.read_u8("version")?)
            .map_err(|kind| CodecError::format(offset, kind))?;

        let offset = reader.position();
        let kind = ContentKind::try_from(reader.read_u8("content kind")?)
            .map_err(|kind| CodecError::format(offset, kind))?;

        Ok(Self { version, kind })
    }
}
