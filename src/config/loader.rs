use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use crate::config::types::{AppConfig, CROSSFADE_RANGE, NORMALIZATION_LEVEL_RANGE};

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {source}")]
    SerializeError {
        #[source]
        source: toml::ser::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock config file '{path}': {source}")]
    LockError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/playdeck/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("playdeck").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `AppConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration to `path`.
    ///
    /// Holds an exclusive lock on `<path>.lock` for the duration of the write
    /// and replaces the file via rename, so readers never see a partial file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError { source: e })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let lock_path = sibling(path, "lock");
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| ConfigError::LockError {
                path: lock_path.clone(),
                source: e,
            })?;
        FileExt::lock_exclusive(&lock).map_err(|e| ConfigError::LockError {
            path: lock_path.clone(),
            source: e,
        })?;

        let tmp_path = sibling(path, "tmp");
        let write_result = (|| {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, path)
        })();

        let _ = FileExt::unlock(&lock);

        write_result.map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - crossfade lies within `CROSSFADE_RANGE`
    /// - normalization level lies within `NORMALIZATION_LEVEL_RANGE`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let crossfade = i64::from(self.player.crossfade_seconds);
        if !CROSSFADE_RANGE.contains(&crossfade) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "crossfade_seconds {} outside {}..={}",
                    crossfade,
                    CROSSFADE_RANGE.start(),
                    CROSSFADE_RANGE.end()
                ),
            });
        }

        let level = i64::from(self.player.normalization_level_db);
        if !NORMALIZATION_LEVEL_RANGE.contains(&level) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "normalization_level_db {} outside {}..={}",
                    level,
                    NORMALIZATION_LEVEL_RANGE.start(),
                    NORMALIZATION_LEVEL_RANGE.end()
                ),
            });
        }

        Ok(())
    }
}

fn sibling(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(extension);
    path.with_file_name(name)
}
