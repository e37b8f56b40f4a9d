use std::collections::BTreeSet;

use tracing::debug;

use crate::engine::core::cell::Cell;
use crate::engine::core::container::header::ContainerHeader;
use crate::engine::core::container::item_marker::ItemMarker;
use crate::engine::core::dictionary::Dictionary;
use crate::engine::core::io::write_varint;
use crate::engine::core::numeric::{apply_delta, classify_columns};
use crate::engine::core::rle::{RleItem, collapse_runs};
use crate::engine::errors::CodecError;
use crate::engine::types::{Content, Field, FormatVersion, Row};

/// An assembled, not yet compressed container plus what went into it.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedBody {
    pub bytes: Vec<u8>,
    pub version: FormatVersion,
    pub numeric_columns: BTreeSet<usize>,
    pub dictionary_len: usize,
    /// Number of serialized items; equals the record count in version 1.
    pub item_count: usize,
}

/// Serializes already-normalized content in the requested layout.
pub fn encode_container(
    content: &Content,
    version: FormatVersion,
) -> Result<EncodedBody, CodecError> {
    let mut buf = Vec::new();
    ContainerHeader::new(version, content.kind()).write_to(&mut buf);

    let body = match version {
        FormatVersion::V1 => encode_v1_body(content, buf)?,
        FormatVersion::V2 => encode_v2_body(content, buf)?,
    };

    debug!(
        target: "container::encode_container",
        version = %version,
        kind = %content.kind(),
        records = content.len(),
        items = body.item_count,
        dictionary = body.dictionary_len,
        numeric_columns = ?body.numeric_columns,
        size = body.bytes.len(),
        "Assembled container"
    );
    Ok(body)
}

fn encode_v2_body(content: &Content, mut buf: Vec<u8>) -> Result<EncodedBody, CodecError> {
    match content {
        Content::Lines(lines) => {
            let dictionary = Dictionary::build(lines.iter().map(String::as_str));
            dictionary.write_to(&mut buf)?;

            let items = collapse_runs(lines.iter().collect::<Vec<_>>());
            write_varint(&mut buf, items.len() as u64)?;
            for item in &items {
                write_item_prefix(&mut buf, item)?;
                Cell::from_text(item.value(), &dictionary).write_to(&mut buf)?;
            }

            Ok(EncodedBody {
                bytes: buf,
                version: FormatVersion::V2,
                numeric_columns: BTreeSet::new(),
                dictionary_len: dictionary.len(),
                item_count: items.len(),
            })
        }
        Content::Rows(rows) => {
            let numeric_columns = classify_columns(rows);
            write_varint(&mut buf, numeric_columns.len() as u64)?;
            for column in &numeric_columns {
                write_varint(&mut buf, *column as u64)?;
            }

            let fields = apply_delta(rows, &numeric_columns);
            let dictionary =
                Dictionary::build(fields.iter().flatten().filter_map(Field::as_text));
            dictionary.write_to(&mut buf)?;

            let items = collapse_runs(fields);
            write_varint(&mut buf, items.len() as u64)?;
            for item in &items {
                write_item_prefix(&mut buf, item)?;
                let row = item.value();
                write_varint(&mut buf, row.len() as u64)?;
                for field in row {
                    Cell::from_field(field, &dictionary).write_to(&mut buf)?;
                }
            }

            Ok(EncodedBody {
                bytes: buf,
                version: FormatVersion::V2,
                numeric_columns,
                dictionary_len: dictionary.len(),
                item_count: items.len(),
            })
        }
    }
}

fn write_item_prefix<T>(buf: &mut Vec<u8>, item: &RleItem<T>) -> Result<(), CodecError> {
    match item {
        RleItem::Literal(_) => buf.push(ItemMarker::Literal.into()),
        RleItem::Repeat { count, .. } => {
            buf.push(ItemMarker::Repeat.into());
            write_varint(buf, *count as u64)?;
        }
    }
    Ok(())
}

fn encode_v1_body(content: &Content, mut buf: Vec<u8>) -> Result<EncodedBody, CodecError> {
    let dictionary = match content {
        Content::Lines(lines) => Dictionary::build(lines.iter().map(String::as_str)),
        Content::Rows(rows) => Dictionary::build(rows.iter().flatten().map(String::as_str)),
    };
    dictionary.write_to(&mut buf)?;
    write_varint(&mut buf, content.len() as u64)?;

    match content {
        Content::Lines(lines) => {
            for line in lines {
                Cell::from_text_legacy(line, &dictionary).write_to(&mut buf)?;
            }
        }
        Content::Rows(rows) => {
            for row in rows {
                write_legacy_row(&mut buf, row, &dictionary)?;
            }
        }
    }

    Ok(EncodedBody {
        bytes: buf,
        version: FormatVersion::V1,
        numeric_columns: BTreeSet::new(),
        dictionary_len: dictionary.len(),
        item_count: content.len(),
    })
}

fn write_legacy_row(
    buf: &mut Vec<u8>,
    row: &Row,
    dictionary: &Dictionary,
) -> Result<(), CodecError> {
    write_varint(buf, row.len() as u64)?;
    for cell in row {
        Cell::from_text_legacy(cell, dictionary).write_to(buf)?;
    }
    Ok(())
}
