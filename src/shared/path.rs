use std::path::{Path, PathBuf};

use crate::engine::types::ContentKind;
use crate::shared::config::OutputConfig;

/// Returns an absolute version of the provided path without touching the filesystem.
/// Falls back to the original path if the current working directory cannot be resolved.
pub fn absolutize<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        return path.to_path_buf();
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// `.csv` (any case) is row content; everything else is read as lines.
pub fn content_kind_for(path: &Path) -> ContentKind {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => ContentKind::Rows,
        _ => ContentKind::Lines,
    }
}

/// `dir/name.csv` -> `dir/name_deduped.min`
pub fn encoded_output_path(input: &Path, output: &OutputConfig) -> PathBuf {
    let stem = file_stem(input);
    input.with_file_name(format!(
        "{stem}{}.{}",
        output.encoded_suffix, output.encoded_extension
    ))
}

/// `dir/name_deduped.min` -> `dir/name_decompressed.csv` (or `.txt` for lines)
pub fn decoded_output_path(input: &Path, kind: ContentKind, output: &OutputConfig) -> PathBuf {
    let stem = file_stem(input);
    let base = stem
        .strip_suffix(output.encoded_suffix.as_str())
        .filter(|b| !b.is_empty())
        .unwrap_or(stem.as_str());
    let extension = match kind {
        ContentKind::Rows => "csv",
        ContentKind::Lines => "txt",
    };
    input.with_file_name(format!("{base}{}.{extension}", output.decoded_suffix))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
