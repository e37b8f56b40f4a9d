use crate::engine::core::io::varint::{MAX_VARINT_GROUPS, decode_varint};
use crate::engine::errors::{CodecError, FormatErrorKind};

pub const SIZE_I16: usize = 2;
pub const SIZE_I32: usize = 4;
pub const SIZE_I64: usize = 8;
pub const SIZE_F64: usize = 8;

/// Bounded big-endian cursor over a decompressed container.
///
/// Every read names the field it is reading so a short buffer surfaces as a
/// [`CodecError::Truncated`] pointing at the exact offset.
pub struct BeSliceReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BeSliceReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn has_bytes(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    pub fn read_bytes(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], CodecError> {
        if !self.has_bytes(n) {
            return Err(CodecError::Truncated {
                offset: self.pos,
                field,
                needed: n - self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_array<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, field)?);
        Ok(out)
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, CodecError> {
        Ok(self.read_array::<1>(field)?[0])
    }

    pub fn read_i8(&mut self, field: &'static str) -> Result<i8, CodecError> {
        Ok(i8::from_be_bytes(self.read_array(field)?))
    }

    pub fn read_i16(&mut self, field: &'static str) -> Result<i16, CodecError> {
        Ok(i16::from_be_bytes(self.read_array::<SIZE_I16>(field)?))
    }

    pub fn read_i32(&mut self, field: &'static str) -> Result<i32, CodecError> {
        Ok(i32::from_be_bytes(self.read_array::<SIZE_I32>(field)?))
    }

    pub fn read_i64(&mut self, field: &'static str) -> Result<i64, CodecError> {
        Ok(i64::from_be_bytes(self.read_array::<SIZE_I64>(field)?))
    }

    pub fn read_f64(&mut self, field: &'static str) -> Result<f64, CodecError> {
        Ok(f64::from_be_bytes(self.read_array::<SIZE_F64>(field)?))
    }

    pub fn read_varint(&mut self, field: &'static str) -> Result<u64, CodecError> {
        let (value, used) =
            decode_varint(&self.buf[self.pos..], self.pos).map_err(|e| match e {
                CodecError::Truncated { offset, needed, .. } => CodecError::Truncated {
                    offset,
                    field,
                    needed,
                },
                other => other,
            })?;
        self.pos += used;
        Ok(value)
    }

    /// Reads a varint used as a length or count.
    pub fn read_len(&mut self, field: &'static str) -> Result<usize, CodecError> {
        let start = self.pos;
        let value = self.read_varint(field)?;
        usize::try_from(value).map_err(|_| {
            CodecError::format(start, FormatErrorKind::VarintOverflow(MAX_VARINT_GROUPS))
        })
    }

    /// Reads a varint byte length followed by that many UTF-8 bytes.
    pub fn read_string(&mut self, field: &'static str) -> Result<String, CodecError> {
        let len = self.read_len(field)?;
        let start = self.pos;
        let bytes = self.read_bytes(len, field)?;
        String::from_utf8(bytes.to_vec()).map_err(|e| {
            CodecError::Encoding(format!(
                "invalid UTF-8 in {} at offset {}: {}",
                field, start, e
            ))
        })
    }

    /// Fails unless every byte has been consumed.
    pub fn expect_end(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::format(
                self.pos,
                FormatErrorKind::TrailingBytes(n),
            )),
        }
    }
}
