use std::env;

use serde::Deserialize;

use crate::engine::core::compression::{DEFAULT_GZIP_LEVEL, DEFAULT_ZSTD_LEVEL};
use crate::engine::core::container::DEFAULT_MAX_RECORDS;
use crate::engine::types::FormatVersion;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub codec: CodecConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// zstd level for newly written files.
    pub compression_level: i32,
    pub legacy_compression_level: u32,
    pub write_version: FormatVersion,
    /// Decoding fails once a container expands past this many records.
    pub max_records: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub encoded_suffix: String,
    pub encoded_extension: String,
    pub decoded_suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// No file layer is installed when unset.
    pub log_dir: Option<String>,
    pub stdout_level: String,
    pub file_level: String,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("MINFMT_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Defaults, then the optional file at `config_path`, then `MINFMT__*`
/// environment variables.
pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .set_default("codec.compression_level", DEFAULT_ZSTD_LEVEL as i64)?
        .set_default("codec.legacy_compression_level", DEFAULT_GZIP_LEVEL as i64)?
        .set_default("codec.write_version", u8::from(FormatVersion::CURRENT) as i64)?
        .set_default("codec.max_records", DEFAULT_MAX_RECORDS as i64)?
        .set_default("output.encoded_suffix", "_deduped")?
        .set_default("output.encoded_extension", "min")?
        .set_default("output.decoded_suffix", "_decompressed")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("MINFMT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
