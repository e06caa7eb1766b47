//! Configuration file handling for campeek.
//!
//! Loads configuration from `<config dir>/campeek/config.toml` or a custom
//! path. Every field is optional; a missing file means defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::CharSet;
use crate::preview::DEFAULT_WINDOW_NAME;

/// Contents of the default config file written by `campeek config init`.
pub const DEFAULT_CONFIG: &str = r#"# campeek configuration

[camera]
# Camera device index (0 = system default)
device = 0

[window]
# Title shown on the preview window
title = "Video"
# Character set: standard, blocks, minimal
charset = "standard"
# Invert brightness (for light terminal themes)
invert = false
# Draw in 24-bit color
color = true

[preview]
# Consecutive failed frame reads tolerated before giving up (0 = stop on the first)
read_retries = 0
"#;

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub camera: CameraConfig,
    pub window: WindowConfig,
    pub preview: PreviewConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub device: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub charset: CharSet,
    pub invert: bool,
    pub color: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_NAME.to_string(),
            charset: CharSet::default(),
            invert: false,
            color: true,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    pub read_retries: u32,
}

impl Config {
    /// Load configuration from `path`, or from [`default_path`] when `None`.
    ///
    /// Returns the default config if the file doesn't exist, and an error if
    /// it exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
    ///
    /// Refuses to overwrite an existing file.
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, DEFAULT_CONFIG).map_err(io_err)
    }
}

/// Errors that can occur when loading or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("campeek")
        .join("config.toml")
}
