use crate::engine::core::dictionary::Dictionary;
use crate::engine::core::io::{BeSliceReader, write_varint};
use crate::engine::core::numeric::{
    canonical_float, canonical_int, format_float, format_int, resolve_delta,
};
use crate::engine::errors::{CodecError, FormatErrorKind};
use crate::engine::types::Field;

pub const TAG_RAW_STRING: u8 = 0x00;
pub const TAG_EMPTY: u8 = 0x01;
pub const TAG_DELTA: u8 = 0xF7;
pub const TAG_INT8: u8 = 0xF8;
pub const TAG_INT16: u8 = 0xF9;
pub const TAG_INT32: u8 = 0xFA;
pub const TAG_INT64: u8 = 0xFB;
pub const TAG_FLOAT64: u8 = 0xFC;
pub const TAG_DICT_REF: u8 = 0xFF;

/// A single serialized value, discriminated on the wire by its leading tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    RawString(String),
    DictRef(usize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    /// Offset from the previous row's value in the same column.
    Delta(f64),
}

impl Cell {
    pub fn tag(&self) -> u8 {
        match self {
            Cell::Empty => TAG_EMPTY,
            Cell::RawString(_) => TAG_RAW_STRING,
            Cell::DictRef(_) => TAG_DICT_REF,
            Cell::Int8(_) => TAG_INT8,
            Cell::Int16(_) => TAG_INT16,
            Cell::Int32(_) => TAG_INT32,
            Cell::Int64(_) => TAG_INT64,
            Cell::Float64(_) => TAG_FLOAT64,
            Cell::Delta(_) => TAG_DELTA,
        }
    }

    pub fn from_field(field: &Field, dictionary: &Dictionary) -> Self {
        match field {
            Field::Text(text) => Self::from_text(text, dictionary),
            Field::Delta(offset) => Cell::Delta(*offset),
        }
    }

    /// Picks the tag for a plain value: empty, then the narrowest integer,
    /// then float, then a dictionary reference, then the raw bytes.
    pub fn from_text(text: &str, dictionary: &Dictionary) -> Self {
        if text.is_empty() {
            return Cell::Empty;
        }
        if let Some(v) = canonical_int(text) {
            return Self::narrowest_int(v);
        }
        if let Some(v) = canonical_float(text) {
            return Cell::Float64(v);
        }
        match dictionary.index_of(text) {
            Some(index) => Cell::DictRef(index),
            None => Cell::RawString(text.to_string()),
        }
    }

    /// Version 1 containers only know dictionary references and raw strings;
    /// empty values are written as zero-length raw strings.
    pub fn from_text_legacy(text: &str, dictionary: &Dictionary) -> Self {
        match dictionary.index_of(text) {
            Some(index) if !text.is_empty() => Cell::DictRef(index),
            _ => Cell::RawString(text.to_string()),
        }
    }

    fn narrowest_int(v: i64) -> Self {
        if let Ok(v) = i8::try_from(v) {
            Cell::Int8(v)
        } else if let Ok(v) = i16::try_from(v) {
            Cell::Int16(v)
        } else if let Ok(v) = i32::try_from(v) {
            Cell::Int32(v)
        } else {
            Cell::Int64(v)
        }
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), CodecError> {
        buf.push(self.tag());
        match self {
            Cell::Empty => {}
            Cell::RawString(s) => {
                write_varint(buf, s.len() as u64)?;
                buf.extend_from_slice(s.as_bytes());
            }
            Cell::DictRef(index) => write_varint(buf, *index as u64)?,
            Cell::Int8(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Cell::Int16(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Cell::Int32(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Cell::Int64(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Cell::Float64(v) | Cell::Delta(v) => buf.extend_from_slice(&v.to_be_bytes()),
        }
        Ok(())
    }

    /// Reads one cell using the full version 2 tag set.
    pub fn read_from(reader: &mut BeSliceReader<'_>) -> Result<Self, CodecError> {
        let offset = reader.position();
        let tag = reader.read_u8("cell tag")?;
        Self::read_payload(tag, offset, reader)
    }

    /// Reads one cell from a version 1 container.
    pub fn read_legacy(reader: &mut BeSliceReader<'_>) -> Result<Self, CodecError> {
        let offset = reader.position();
        let tag = reader.read_u8("cell tag")?;
        match tag {
            TAG_RAW_STRING | TAG_EMPTY | TAG_DICT_REF => Self::read_payload(tag, offset, reader),
            TAG_DELTA..=TAG_FLOAT64 => Err(CodecError::format(
                offset,
                FormatErrorKind::TagNotInVersion1(tag),
            )),
            other => Err(CodecError::format(
                offset,
                FormatErrorKind::UnknownCellTag(other),
            )),
        }
    }

    fn read_payload(
        tag: u8,
        offset: usize,
        reader: &mut BeSliceReader<'_>,
    ) -> Result<Self, CodecError> {
        let cell = match tag {
            TAG_EMPTY => Cell::Empty,
            TAG_RAW_STRING => Cell::RawString(reader.read_string("raw string")?),
            TAG_DICT_REF => Cell::DictRef(reader.read_len("dictionary index")?),
            TAG_INT8 => Cell::Int8(reader.read_i8("int8 payload")?),
            TAG_INT16 => Cell::Int16(reader.read_i16("int16 payload")?),
            TAG_INT32 => Cell::Int32(reader.read_i32("int32 payload")?),
            TAG_INT64 => Cell::Int64(reader.read_i64("int64 payload")?),
            TAG_FLOAT64 => Cell::Float64(reader.read_f64("float64 payload")?),
            TAG_DELTA => Cell::Delta(reader.read_f64("delta payload")?),
            other => {
                return Err(CodecError::format(
                    offset,
                    FormatErrorKind::UnknownCellTag(other),
                ));
            }
        };
        Ok(cell)
    }

    /// Turns the cell back into text.
    ///
    /// `delta_base` is the previous row's value in the same column, present
    /// only when that column is numeric-eligible and the previous row has it.
    pub fn resolve(
        &self,
        dictionary: &Dictionary,
        column: Option<usize>,
        delta_base: Option<&str>,
    ) -> Result<String, FormatErrorKind> {
        let text = match self {
            Cell::Empty => String::new(),
            Cell::RawString(s) => s.clone(),
            Cell::DictRef(index) => dictionary
                .get(*index)
                .ok_or(FormatErrorKind::DictionaryIndexOutOfRange {
                    index: *index as u64,
                    len: dictionary.len(),
                })?
                .to_string(),
            Cell::Int8(v) => format_int(i64::from(*v)),
            Cell::Int16(v) => format_int(i64::from(*v)),
            Cell::Int32(v) => format_int(i64::from(*v)),
            Cell::Int64(v) => format_int(*v),
            Cell::Float64(v) => format_float(*v),
            Cell::Delta(offset) => delta_base
                .and_then(|base| resolve_delta(base, *offset))
                .ok_or(FormatErrorKind::UnresolvableDelta { column })?,
        };
        Ok(text)
    }
}
