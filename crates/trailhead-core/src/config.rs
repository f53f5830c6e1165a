//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/trailhead/config.toml)
//! 3. Environment variables (TRAILHEAD_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix
const ENV_PREFIX: &str = "TRAILHEAD";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory settings documents are stored in
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Record store key of the site settings document
    #[serde(default = "default_settings_key")]
    pub settings_key: String,

    /// Persist after every applied change instead of on explicit save
    #[serde(default)]
    pub autosave: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            settings_key: default_settings_key(),
            autosave: false,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (TRAILHEAD_DATA_DIR, TRAILHEAD_SETTINGS_KEY,
    ///    TRAILHEAD_AUTOSAVE)
    /// 2. Config file (~/.config/trailhead/config.toml or TRAILHEAD_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // TRAILHEAD_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // TRAILHEAD_SETTINGS_KEY
        if let Ok(val) = std::env::var(format!("{}_SETTINGS_KEY", ENV_PREFIX)) {
            if !val.is_empty() {
                self.settings_key = val;
            }
        }

        // TRAILHEAD_AUTOSAVE
        if let Ok(val) = std::env::var(format!("{}_AUTOSAVE", ENV_PREFIX)) {
            self.autosave = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_file_path())
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with the TRAILHEAD_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trailhead")
            .join("config.toml")
    }

    /// Get the path the site settings document is stored at
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.settings_key))
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trailhead")
}

/// Get the default settings key
fn default_settings_key() -> String {
    "site".to_string()
}
