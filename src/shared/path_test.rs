use std::path::{Path, PathBuf};

use crate::engine::types::ContentKind;
use crate::shared::config::OutputConfig;
use crate::shared::path::{
    absolutize, content_kind_for, decoded_output_path, encoded_output_path,
};

fn output() -> OutputConfig {
    OutputConfig {
        encoded_suffix: "_deduped".into(),
        encoded_extension: "min".into(),
        decoded_suffix: "_decompressed".into(),
    }
}

#[test]
fn kind_follows_extension() {
    assert_eq!(content_kind_for(Path::new("a/b.csv")), ContentKind::Rows);
    assert_eq!(content_kind_for(Path::new("B.CSV")), ContentKind::Rows);
    assert_eq!(content_kind_for(Path::new("notes.txt")), ContentKind::Lines);
    assert_eq!(content_kind_for(Path::new("README")), ContentKind::Lines);
}

#[test]
fn encoded_name_replaces_extension() {
    assert_eq!(
        encoded_output_path(Path::new("/data/sales.csv"), &output()),
        PathBuf::from("/data/sales_deduped.min")
    );
    assert_eq!(
        encoded_output_path(Path::new("/data/archive.tar.txt"), &output()),
        PathBuf::from("/data/archive.tar_deduped.min")
    );
}

#[test]
fn decoded_name_strips_encoded_suffix() {
    assert_eq!(
        decoded_output_path(Path::new("/data/sales_deduped.min"), ContentKind::Rows, &output()),
        PathBuf::from("/data/sales_decompressed.csv")
    );
    assert_eq!(
        decoded_output_path(Path::new("/data/notes.min"), ContentKind::Lines, &output()),
        PathBuf::from("/data/notes_decompressed.txt")
    );
    assert_eq!(
        decoded_output_path(Path::new("/data/_deduped.min"), ContentKind::Lines, &output()),
        PathBuf::from("/data/_deduped_decompressed.txt")
    );
}

#[test]
fn absolutize_keeps_absolute_paths() {
    assert_eq!(absolutize("/tmp/x.csv"), PathBuf::from("/tmp/x.csv"));
    assert!(absolutize("x.csv").is_absolute());
}
