//! Config command handlers

use anyhow::{bail, Context, Result};

use trailhead_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "settings_key": config.settings_key,
                    "autosave": config.autosave
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:     {}", config.data_dir.display());
            println!("  settings_key: {}", config.settings_key);
            println!("  autosave:     {}", config.autosave);
            println!();
            println!("Config file:   {}", Config::config_file_path().display());
            println!("Settings file: {}", config.settings_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = value.clone().into();
        }
        "settings_key" => {
            if value.is_empty() {
                bail!("settings_key cannot be empty");
            }
            config.settings_key = value.clone();
        }
        "autosave" => {
            config.autosave = value
                .parse()
                .context("Invalid value for autosave. Use 'true' or 'false'.")?;
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, settings_key, autosave",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
