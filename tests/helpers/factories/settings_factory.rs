use crate::engine::core::compression::{DEFAULT_GZIP_LEVEL, DEFAULT_ZSTD_LEVEL};
use crate::engine::core::container::DEFAULT_MAX_RECORDS;
use crate::engine::types::FormatVersion;
use crate::shared::config::{CodecConfig, LoggingConfig, OutputConfig, Settings};

/// Settings with the built-in defaults, independent of any config file or
/// environment on the test machine.
pub struct SettingsFactory {
    settings: Settings,
}

impl SettingsFactory {
    pub fn new() -> Self {
        Self {
            settings: Settings {
                codec: CodecConfig {
                    compression_level: DEFAULT_ZSTD_LEVEL,
                    legacy_compression_level: DEFAULT_GZIP_LEVEL,
                    write_version: FormatVersion::CURRENT,
                    max_records: DEFAULT_MAX_RECORDS,
                },
                output: OutputConfig {
                    encoded_suffix: "_deduped".into(),
                    encoded_extension: "min".into(),
                    decoded_suffix: "_decompressed".into(),
                },
                logging: LoggingConfig {
                    log_dir: None,
                    stdout_level: "info".into(),
                    file_level: "debug".into(),
                },
            },
        }
    }

    pub fn with_version(mut self, version: FormatVersion) -> Self {
        self.settings.codec.write_version = version;
        self
    }

    pub fn with_compression_level(mut self, level: i32) -> Self {
        self.settings.codec.compression_level = level;
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.settings.codec.max_records = max_records;
        self
    }

    pub fn create(self) -> Settings {
        self.settings
    }
}
