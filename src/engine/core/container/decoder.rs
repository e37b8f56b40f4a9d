use std::collections::BTreeSet;

use tracing::debug;

use crate::engine::core::cell::Cell;
use crate::engine::core::container::header::ContainerHeader;
use crate::engine::core::container::item_marker::ItemMarker;
use crate::engine::core::dictionary::Dictionary;
use crate::engine::core::io::BeSliceReader;
use crate::engine::core::rle::{RleItem, expand_runs};
use crate::engine::errors::{CodecError, FormatErrorKind};
use crate::engine::types::{Content, ContentKind, FormatVersion, Row};

/// Upper bound on records a single container may expand to.
pub const DEFAULT_MAX_RECORDS: usize = 10_000_000;

type BodyDecoder =
    fn(&mut BeSliceReader<'_>, ContentKind, usize) -> Result<Content, CodecError>;

/// A cell together with the offset of its tag byte.
type PlacedCell = (usize, Cell);

/// Parses a decompressed container. The version byte selects the body
/// decoder once; any byte the selected layout does not define is fatal.
pub fn decode_container(bytes: &[u8]) -> Result<Content, CodecError> {
    decode_container_with_limit(bytes, DEFAULT_MAX_RECORDS)
}

/// Like [`decode_container`], but fails once the records described by the
/// container, repeats included, would exceed `max_records`.
pub fn decode_container_with_limit(
    bytes: &[u8],
    max_records: usize,
) -> Result<Content, CodecError> {
    let mut reader = BeSliceReader::new(bytes);
    let header = ContainerHeader::read_from(&mut reader)?;

    let body: BodyDecoder = match header.version {
        FormatVersion::V1 => decode_v1_body,
        FormatVersion::V2 => decode_v2_body,
    };
    let content = body(&mut reader, header.kind, max_records)?;
    reader.expect_end()?;

    debug!(
        target: "container::decode_container",
        version = %header.version,
        kind = %header.kind,
        records = content.len(),
        "Decoded container"
    );
    Ok(content)
}

fn decode_v1_body(
    reader: &mut BeSliceReader<'_>,
    kind: ContentKind,
    max_records: usize,
) -> Result<Content, CodecError> {
    let dictionary = Dictionary::read_from(reader)?;
    let offset = reader.position();
    let count = reader.read_len("item count")?;
    if count > max_records {
        return Err(CodecError::format(
            offset,
            FormatErrorKind::RecordLimitExceeded { limit: max_records },
        ));
    }
    let capacity = count.min(reader.remaining());

    match kind {
        ContentKind::Lines => {
            let mut lines = Vec::with_capacity(capacity);
            for _ in 0..count {
                let offset = reader.position();
                let cell = Cell::read_legacy(reader)?;
                lines.push(resolve_plain(&cell, offset, &dictionary)?);
            }
            Ok(Content::Lines(lines))
        }
        ContentKind::Rows => {
            let mut rows = Vec::with_capacity(capacity);
            for _ in 0..count {
                let cells = read_row_cells(reader, Cell::read_legacy)?;
                rows.push(resolve_row(&cells, &dictionary, &BTreeSet::new(), None)?);
            }
            Ok(Content::Rows(rows))
        }
    }
}

fn decode_v2_body(
    reader: &mut BeSliceReader<'_>,
    kind: ContentKind,
    max_records: usize,
) -> Result<Content, CodecError> {
    let numeric_columns = match kind {
        ContentKind::Rows => read_numeric_columns(reader)?,
        ContentKind::Lines => BTreeSet::new(),
    };
    let dictionary = Dictionary::read_from(reader)?;
    let count = reader.read_len("item count")?;
    let capacity = count.min(reader.remaining());

    match kind {
        ContentKind::Lines => {
            let mut items = Vec::with_capacity(capacity);
            let mut expanded = 0;
            for _ in 0..count {
                let copies = read_item_prefix(reader, expanded, max_records)?;
                expanded += copies;
                let offset = reader.position();
                let cell = Cell::read_from(reader)?;
                let line = resolve_plain(&cell, offset, &dictionary)?;
                items.push(if copies > 1 {
                    RleItem::Repeat {
                        count: copies,
                        value: line,
                    }
                } else {
                    RleItem::Literal(line)
                });
            }
            Ok(Content::Lines(expand_runs(&items)))
        }
        ContentKind::Rows => {
            let mut rows: Vec<Row> = Vec::with_capacity(capacity);
            for _ in 0..count {
                let copies = read_item_prefix(reader, rows.len(), max_records)?;
                let cells = read_row_cells(reader, Cell::read_from)?;
                // Each copy resolves its deltas against the row emitted just
                // before it, so repeated delta rows keep counting up.
                for _ in 0..copies {
                    let row = resolve_row(
                        &cells,
                        &dictionary,
                        &numeric_columns,
                        rows.last().map(Vec::as_slice),
                    )?;
                    rows.push(row);
                }
            }
            Ok(Content::Rows(rows))
        }
    }
}

fn read_numeric_columns(reader: &mut BeSliceReader<'_>) -> Result<BTreeSet<usize>, CodecError> {
    let count = reader.read_len("numeric column count")?;
    let mut columns = BTreeSet::new();
    for _ in 0..count {
        columns.insert(reader.read_len("numeric column index")?);
    }
    Ok(columns)
}

/// Reads the item marker and, for repeats, the count. Returns the number of
/// copies the item expands to; `decoded` records already precede it.
fn read_item_prefix(
    reader: &mut BeSliceReader<'_>,
    decoded: usize,
    max_records: usize,
) -> Result<usize, CodecError> {
    let offset = reader.position();
    let marker = ItemMarker::try_from(reader.read_u8("item marker")?)
        .map_err(|kind| CodecError::format(offset, kind))?;

    let copies = read_copies(reader, marker)?;
    if decoded.saturating_add(copies) > max_records {
        return Err(CodecError::format(
            offset,
            FormatErrorKind::RecordLimitExceeded { limit: max_records },
        ));
    }
    Ok(copies)
}

fn read_copies(reader: &mut BeSliceReader<'_>, marker: ItemMarker) -> Result<usize, CodecError> {
    match marker {
        ItemMarker::Literal => Ok(1),
        ItemMarker::Repeat => {
            let offset = reader.position();
            let count = reader.read_varint("repeat count")?;
            if count < 2 {
                return Err(CodecError::format(
                    offset,
                    FormatErrorKind::InvalidRepeatCount(count),
                ));
            }
            usize::try_from(count).map_err(|_| {
                CodecError::format(offset, FormatErrorKind::InvalidRepeatCount(count))
            })
        }
    }
}

fn read_row_cells(
    reader: &mut BeSliceReader<'_>,
    read_cell: fn(&mut BeSliceReader<'_>) -> Result<Cell, CodecError>,
) -> Result<Vec<PlacedCell>, CodecError> {
    let columns = reader.read_len("column count")?;
    let mut cells = Vec::with_capacity(columns.min(reader.remaining()));
    for _ in 0..columns {
        let offset = reader.position();
        cells.push((offset, read_cell(reader)?));
    }
    Ok(cells)
}

fn resolve_plain(
    cell: &Cell,
    offset: usize,
    dictionary: &Dictionary,
) -> Result<String, CodecError> {
    cell.resolve(dictionary, None, None)
        .map_err(|kind| CodecError::format(offset, kind))
}

fn resolve_row(
    cells: &[PlacedCell],
    dictionary: &Dictionary,
    numeric_columns: &BTreeSet<usize>,
    previous: Option<&[String]>,
) -> Result<Row, CodecError> {
    cells
        .iter()
        .enumerate()
        .map(|(column, (offset, cell))| {
            let base = previous
                .filter(|_| numeric_columns.contains(&column))
                .and_then(|prev| prev.get(column))
                .map(String::as_str);
            cell.resolve(dictionary, Some(column), base)
                .map_err(|kind| CodecError::format(*offset, kind))
        })
        .collect()
}
