//! User configuration.
//!
//! Read from `$XDG_CONFIG_HOME/pocketcalc/config.toml` unless a path is
//! given explicitly. A missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::ui::Skin;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Persistent presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Skin shown after the splash screen.
    pub skin: Skin,
    /// How long the splash screen stays up, in milliseconds.
    pub splash_ms: u64,
    /// Draw the keypad under the display.
    pub show_keypad: bool,
    /// Use terminal colors.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skin: Skin::Light,
            splash_ms: 2000,
            show_keypad: true,
            color: true,
        }
    }
}

impl Config {
    /// Default location of the config file, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pocketcalc").join("config.toml"))
    }

    /// Load the config from `path`, or from the default location when `None`.
    ///
    /// A file that does not exist yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
