//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] over a single JSON document on disk.  A missing
//! file is not an error: the calculator runs on defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::app::ports::ConfigPort;
use crate::config::CalculatorConfig;
use crate::error::ConfigError;

pub struct JsonFileConfig {
    path: PathBuf,
}

impl JsonFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate a config document.
    pub fn parse(json: &str) -> Result<CalculatorConfig, ConfigError> {
        let cfg: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl ConfigPort for JsonFileConfig {
    fn load(&self) -> Result<CalculatorConfig, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let cfg = Self::parse(&json)?;
                info!("JsonFileConfig: loaded {}", self.path.display());
                Ok(cfg)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("JsonFileConfig: {} not found, using defaults", self.path.display());
                Ok(CalculatorConfig::default())
            }
            Err(e) => Err(ConfigError::Io(e.to_string())),
        }
    }
}
