//! Configuration file loading
//!
//! Handles:
//! - Locating the per-user config file
//! - Parsing the YAML configuration document

use super::{Config, ConfigError};
use crate::log_debug;
use std::{fs, path::PathBuf};

pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    pub fn new() -> Result<Self, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        let config_path = home_dir.join(".config").join("sockssh.yaml");
        Ok(Self { config_path })
    }

    /// Load the configuration from the config file
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        log_debug!("Loading configuration from: {:?}", self.config_path);

        let config_content = fs::read_to_string(&self.config_path)
            .map_err(|err| ConfigError::ReadError(self.config_path.clone(), err))?;

        let config: Config = serde_yaml::from_str(&config_content)?;
        log_debug!(
            "Parsed configuration with {} environment override(s)",
            config.environments.len()
        );

        Ok(config)
    }
}

#[cfg(test)]
#[path = "../test/config/loader.rs"]
mod tests;
