use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::command::handlers::content_io::{read_non_empty, render_content, write_atomically};
use crate::command::types::DecompressReport;
use crate::engine::{Codec, CodecError};
use crate::shared::config::Settings;
use crate::shared::path::{absolutize, decoded_output_path};

/// Appended when neither compressor accepts the file. Files written by the
/// LZMA-based releases fail this way.
pub const UNREADABLE_TRANSPORT_HINT: &str =
    " (not a zstd or gzip MIN file; LZMA .min files from older releases are unsupported)";

/// Restores a container file next to itself as `.csv` or `.txt`.
pub fn decompress_file(path: &Path, settings: &Settings) -> Result<Option<DecompressReport>> {
    let input = absolutize(path);
    let Some(bytes) = read_non_empty(&input)? else {
        warn!(
            target: "command::decompress_file",
            path = %input.display(),
            "Skipping missing or empty file"
        );
        return Ok(None);
    };

    let content = Codec::from_config(&settings.codec)
        .decode(&bytes)
        .inspect_err(|e| e.log_error())
        .map_err(|e| {
            let hint = match e {
                CodecError::Decompression { .. } => UNREADABLE_TRANSPORT_HINT,
                _ => "",
            };
            anyhow::Error::new(e).context(format!("Failed to decode {}{hint}", input.display()))
        })?;

    let kind = content.kind();
    let output = decoded_output_path(&input, kind, &settings.output);
    write_atomically(&output, &render_content(&content)?)?;

    info!(
        target: "command::decompress_file",
        input = %input.display(),
        output = %output.display(),
        kind = %kind,
        records = content.len(),
        "Decompressed file"
    );
    Ok(Some(DecompressReport {
        input,
        output,
        kind,
        records: content.len(),
    }))
}
