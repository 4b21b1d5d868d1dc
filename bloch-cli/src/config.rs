//! Viewer configuration (bloch.toml)
//!
//! Resolution order: built-in defaults, then `bloch.toml`, then the
//! `BLOCH_*` environment variables, then command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "bloch.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Output options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colored terminal output
    pub color: bool,

    /// Emit JSON instead of text
    pub json: bool,

    /// Draw the ASCII projection after every change
    pub ascii: bool,

    /// Radius of the ASCII projection, in rows
    pub radius: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
            ascii: true,
            radius: 6,
        }
    }
}

/// Interactive session options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "bloch> ".to_string(),
        }
    }
}

impl Config {
    /// Parse a config from TOML string
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a file path
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load `explicit` if given (it must exist), otherwise `./bloch.toml`
    /// when present, otherwise defaults. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_with(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `BLOCH_COLOR` and `BLOCH_JSON` from the given lookup
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("BLOCH_COLOR") {
            self.display.color = env_flag(&v);
        }
        if let Some(v) = lookup("BLOCH_JSON") {
            self.display.json = env_flag(&v);
        }
    }
}

fn env_flag(value: &str) -> bool {
    let value = value.trim();
    value != "false" && value != "0" && !value.is_empty()
}
