use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::command::handlers::content_io::{
    decode_text, parse_content, read_non_empty, write_atomically,
};
use crate::command::types::CompressReport;
use crate::engine::Codec;
use crate::shared::config::Settings;
use crate::shared::path::{absolutize, content_kind_for, encoded_output_path};

/// Compresses `path` into a sibling container file.
///
/// Returns `Ok(None)` when the file is missing or empty; nothing is written
/// in that case.
pub fn compress_file(path: &Path, settings: &Settings) -> Result<Option<CompressReport>> {
    let input = absolutize(path);
    let Some(bytes) = read_non_empty(&input)? else {
        warn!(
            target: "command::compress_file",
            path = %input.display(),
            "Skipping missing or empty file"
        );
        return Ok(None);
    };
    let original_size = bytes.len() as u64;

    let kind = content_kind_for(&input);
    let text = decode_text(bytes);
    let content = parse_content(&text, kind)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let encoded = Codec::from_config(&settings.codec)
        .encode(content)
        .inspect_err(|e| e.log_error())
        .with_context(|| format!("Failed to encode {}", input.display()))?;

    let output = encoded_output_path(&input, &settings.output);
    write_atomically(&output, &encoded.bytes)?;

    let report = CompressReport {
        input,
        output,
        original_size,
        compressed_size: encoded.bytes.len() as u64,
        stats: encoded.stats,
    };

    info!(
        target: "command::compress_file",
        input = %report.input.display(),
        output = %report.output.display(),
        kind = %kind,
        removed = report.records_removed(),
        original_size = report.original_size,
        compressed_size = report.compressed_size,
        "Compressed file"
    );
    Ok(Some(report))
}
