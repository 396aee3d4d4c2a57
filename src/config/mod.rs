//! Persistent user preferences and their on-disk storage.

pub mod model;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::core::utils::{app_data_dir, atomic_write, config_file_in};
use crate::errors::FinanceError;

pub use model::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

impl From<ConfigError> for FinanceError {
    fn from(err: ConfigError) -> Self {
        FinanceError::Storage(err.to_string())
    }
}

/// Loads and saves [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Uses `<base>/config/config.json`.
    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(config_file_in(base))
    }

    /// Uses the application data directory (`$FINOTE_HOME` or `~/.finote`).
    pub fn from_env() -> Self {
        Self::with_base_dir(&app_data_dir())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the stored config, or the defaults when none has been saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        atomic_write(&self.config_path, &json)?;
        Ok(())
    }
}
