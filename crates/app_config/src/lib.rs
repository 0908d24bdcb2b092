// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use log::{LevelFilter, debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Largest accepted `label_precision`.
pub use common::MAX_LABEL_PRECISION;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration in {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown log level \"{0}\"")]
    LogLevel(String),

    #[error("label_precision {0} exceeds the maximum of {max}", max = MAX_LABEL_PRECISION)]
    LabelPrecision(usize),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Decimal places shown in distance labels and the final area.
    pub label_precision: usize,
    /// Overrides the build profile's default log level, e.g. `"debug"`.
    pub log_level: Option<String>,
    /// Crates whose log records are captured.
    pub log_crates: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            label_precision: 3,
            log_level: None,
            log_crates: vec![
                "quadmeasure".into(),
                "quadmeasure_measure".into(),
                "app_config".into(),
            ],
        }
    }
}

impl AppConfig {
    /// `config.toml` in the platform configuration directory, if one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "quadmeasure", "quadmeasure")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Loads from `path` when given.  Otherwise tries [`AppConfig::default_path`], falling back to
    /// defaults if that file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                Some(path) => {
                    debug!("No configuration at {}, using defaults", path.display());
                    Ok(Self::default())
                }
                None => {
                    warn!("No configuration directory available, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label_precision > MAX_LABEL_PRECISION {
            return Err(ConfigError::LabelPrecision(self.label_precision));
        }
        Ok(())
    }

    /// Writes the configuration to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_owned(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_err)
    }

    /// The configured log level, if any.
    pub fn log_level_filter(&self) -> Result<Option<LevelFilter>, ConfigError> {
        self.log_level
            .as_deref()
            .map(|level| {
                level
                    .parse::<LevelFilter>()
                    .map_err(|_| ConfigError::LogLevel(level.to_owned()))
            })
            .transpose()
    }
}


// End of File
