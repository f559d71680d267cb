// Rust guideline compliant 2026-08-12

//! Configuration management for covmerge.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "covmerge.toml";

/// Configuration for a merge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Glob pattern selecting the coverage reports to merge.
    #[serde(default = "default_input_mask")]
    pub input_mask: String,

    /// Path the merged report is written to.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

/// Default glob pattern for input reports.
fn default_input_mask() -> String {
    "coverage/*.xml".to_string()
}

/// Default output path for the merged report.
fn default_output_path() -> String {
    "coverage.xml".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_mask: default_input_mask(),
            output_path: default_output_path(),
        }
    }
}

impl Config {
    /// Loads configuration from a directory and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/covmerge.toml`, if present
    /// 3. Environment variables with `COVMERGE_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory the configuration file is looked up in
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            config = Self::read_file(&config_path)?;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from an explicit file path.
    ///
    /// Unlike [`Config::load`], the file must exist. Environment variable
    /// overrides still apply on top of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML or
    /// fails validation.
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Reads and deserializes a configuration file.
    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `COVMERGE_INPUT_MASK` - Glob pattern for input reports
    /// - `COVMERGE_OUTPUT_PATH` - Output path for the merged report
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("COVMERGE_INPUT_MASK") {
            self.input_mask = val;
        }

        if let Ok(val) = std::env::var("COVMERGE_OUTPUT_PATH") {
            self.output_path = val;
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the input mask or the output path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.input_mask.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "input_mask must not be empty".to_string(),
            ));
        }

        if self.output_path.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "output_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `<dir>/covmerge.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be
    /// written.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
