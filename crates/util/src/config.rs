//! Read-only configuration for the swatch CLI.
//!
//! Settings live in a small JSON file in the standard configuration directory
//! (`~/.config/swatch/config.json` on most platforms). The file is optional
//! and is never written; a missing or unreadable payload falls back to
//! defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs_next::config_dir;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::expand_tilde;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "SWATCH_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Error surfaced when the config file cannot be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O failure (for example, permissions).
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// How palettes are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One color per line.
    #[default]
    Text,
    /// A JSON array.
    Json,
}

/// Values read from the config file. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct SwatchConfig {
    /// Base colors used when none are given on the command line.
    #[serde(default)]
    pub base_colors: Vec<String>,
    /// Preferred output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl SwatchConfig {
    /// Load from `explicit` when given, otherwise from [`default_config_path`].
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error. Unparsable JSON is logged and replaced with defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => load_payload(path)?.ok_or_else(|| ConfigError::NotFound(path.to_path_buf())),
            None => Ok(load_payload(&default_config_path())?.unwrap_or_default()),
        }
    }

    /// Configured base colors, or `None` when the list is empty.
    pub fn base_colors(&self) -> Option<&[String]> {
        if self.base_colors.is_empty() {
            None
        } else {
            Some(&self.base_colors)
        }
    }
}

/// Resolve the config path, honoring [`CONFIG_PATH_ENV`].
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swatch")
        .join(CONFIG_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<Option<SwatchConfig>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => {
                debug!(path = %path.display(), "loaded config file");
                Ok(Some(payload))
            }
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse config file; using defaults"
                );
                Ok(Some(SwatchConfig::default()))
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(ConfigError::Io(error)),
    }
}
