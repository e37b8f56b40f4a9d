use crate::engine::errors::{CodecError, FormatErrorKind};

/// Longest accepted encoding; a fifth byte must terminate the value.
pub const MAX_VARINT_GROUPS: usize = 5;
/// Largest value that fits in [`MAX_VARINT_GROUPS`] groups of 7 bits.
pub const MAX_VARINT_VALUE: u64 = (1 << (7 * MAX_VARINT_GROUPS)) - 1;

/// Appends `value` as 7-bit groups, least significant first, with the top bit
/// of every byte but the last set.
pub fn write_varint(buf: &mut Vec<u8>, value: u64) -> Result<(), CodecError> {
    if value > MAX_VARINT_VALUE {
        return Err(CodecError::Encoding(format!(
            "value {} does not fit in a {}-group varint",
            value, MAX_VARINT_GROUPS
        )));
    }
    let mut v = value;
    while v >= 0x80 {
        buf.push((v as u8 & 0x7F) | 0x80);
        v >>= 7;
    }
    buf.push(v as u8);
    Ok(())
}

/// Decodes a varint from the start of `buf`, returning the value and the
/// number of bytes consumed. `offset` is the absolute position of `buf[0]`
/// and only feeds error reporting.
pub fn decode_varint(buf: &[u8], offset: usize) -> Result<(u64, usize), CodecError> {
    let mut result = 0u64;
    for (i, &byte) in buf.iter().take(MAX_VARINT_GROUPS).enumerate() {
        result |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }

    if buf.len() >= MAX_VARINT_GROUPS {
        Err(CodecError::format(
            offset,
            FormatErrorKind::VarintOverflow(MAX_VARINT_GROUPS),
        ))
    } else {
        Err(CodecError::Truncated {
            offset: offset + buf.len(),
            field: "varint",
            needed: 1,
        })
    }
}
