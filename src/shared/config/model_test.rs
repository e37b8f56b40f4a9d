use std::fs;

use indoc::indoc;
use tempfile::tempdir;

use crate::engine::core::container::DEFAULT_MAX_RECORDS;
use crate::engine::types::FormatVersion;
use crate::shared::config::load_settings_from;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent");

    let settings = load_settings_from(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.codec.compression_level, 19);
    assert_eq!(settings.codec.legacy_compression_level, 9);
    assert_eq!(settings.codec.write_version, FormatVersion::V2);
    assert_eq!(settings.codec.max_records, DEFAULT_MAX_RECORDS);
    assert_eq!(settings.output.encoded_suffix, "_deduped");
    assert_eq!(settings.output.encoded_extension, "min");
    assert_eq!(settings.output.decoded_suffix, "_decompressed");
    assert!(settings.logging.log_dir.is_none());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("minfmt.toml");
    fs::write(
        &path,
        indoc! {r#"
            [codec]
            compression_level = 3
            write_version = 1
            max_records = 50

            [logging]
            log_dir = "logs"
            stdout_level = "warn"
        "#},
    )
    .unwrap();

    let settings = load_settings_from(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.codec.compression_level, 3);
    assert_eq!(settings.codec.write_version, FormatVersion::V1);
    assert_eq!(settings.codec.max_records, 50);
    assert_eq!(settings.codec.legacy_compression_level, 9);
    assert_eq!(settings.logging.log_dir.as_deref(), Some("logs"));
    assert_eq!(settings.logging.stdout_level, "warn");
    assert_eq!(settings.logging.file_level, "debug");
}

#[test]
fn unknown_write_version_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[codec]\nwrite_version = 7\n").unwrap();

    assert!(load_settings_from(path.to_str().unwrap()).is_err());
}
