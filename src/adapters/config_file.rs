//! JSON file config adapter.
//!
//! Implements [`ConfigPort`] over a single pretty-printed JSON file. Fields
//! missing from the file take their defaults; values are range-checked on
//! both load and save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::DashboardConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<DashboardConfig, ConfigError> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => {
                warn!("Reading {} failed: {}", self.path.display(), e);
                ConfigError::IoError
            }
        })?;
        let config: DashboardConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("Parsing {} failed: {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self, config: &DashboardConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let text = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;
        fs::write(&self.path, text).map_err(|e| {
            warn!("Writing {} failed: {}", self.path.display(), e);
            ConfigError::IoError
        })?;
        info!("Config saved to {}", self.path.display());
        Ok(())
    }
}
