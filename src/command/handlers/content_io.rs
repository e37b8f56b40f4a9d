use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::engine::types::{Content, ContentKind, Row};

/// UTF-8 when valid, otherwise every byte is taken as a Latin-1 code point.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(
                target: "content_io::decode_text",
                valid_up_to = e.utf8_error().valid_up_to(),
                "Input is not UTF-8, reading as Latin-1"
            );
            e.into_bytes().iter().map(|&b| char::from(b)).collect()
        }
    }
}

pub fn parse_content(text: &str, kind: ContentKind) -> Result<Content> {
    match kind {
        ContentKind::Lines => Ok(Content::Lines(text.lines().map(str::to_string).collect())),
        ContentKind::Rows => {
            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(text.as_bytes());

            let mut rows = Vec::new();
            for (index, record) in reader.records().enumerate() {
                let record = record.with_context(|| format!("Malformed CSV record {}", index + 1))?;
                rows.push(record.iter().map(str::to_string).collect::<Row>());
            }
            Ok(Content::Rows(rows))
        }
    }
}

/// CSV with minimal quoting for rows; one `\n`-terminated line per entry otherwise.
pub fn render_content(content: &Content) -> Result<Vec<u8>> {
    match content {
        Content::Lines(lines) => {
            let mut out = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
            for line in lines {
                out.extend_from_slice(line.as_bytes());
                out.push(b'\n');
            }
            Ok(out)
        }
        Content::Rows(rows) => {
            let mut writer = WriterBuilder::new()
                .flexible(true)
                .quote_style(QuoteStyle::Necessary)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(Vec::new());
            for row in rows {
                writer.write_record(row)?;
            }
            writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
        }
    }
}

/// Writes through a temp file in the target's directory and renames it into
/// place, so `path` is either untouched or complete.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("Failed to move output into {}", path.display()))?;
    Ok(())
}

/// `None` for a missing or zero-length file.
pub fn read_non_empty(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::metadata(path) {
        Ok(meta) if meta.len() == 0 => return Ok(None),
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("Failed to stat {}", path.display())),
    }
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(bytes))
}
