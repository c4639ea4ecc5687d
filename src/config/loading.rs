//! Configuration loading functionality.
//!
//! Handles locating the configuration file, creating the default one on
//! first run, and resolving paths inside it.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use super::validation::validate_config;
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// Path of the configuration file, in `config_dir` when given.
pub fn get_config_path(config_dir: Option<&Path>) -> Result<PathBuf> {
    match config_dir {
        Some(dir) => Ok(dir.join(CONFIG_FILE_NAME)),
        None => {
            let base = dirs::config_dir().context("Could not determine config directory")?;
            Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        }
    }
}

/// Load configuration, creating a default file if none exists yet.
pub fn load(config_dir: Option<&Path>) -> Result<Config> {
    let config_path = get_config_path(config_dir)?;

    if !config_path.exists() {
        super::builder::create_default_config(&config_path)
            .context("Failed to create default config during load")?;
    }

    load_from_path(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
}

/// Load configuration from a specific path.
///
/// Unlike [`load`], a missing file is an error here.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!("Configuration file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    validate_config(&config)?;
    resolve_calendar_path(&mut config, path.parent());

    Ok(config)
}

/// Anchor a relative (or missing) calendar path to the configuration directory.
fn resolve_calendar_path(config: &mut Config, base_dir: Option<&Path>) {
    let calendar = config.calendar_path();
    if calendar.is_relative()
        && let Some(base) = base_dir
    {
        config.calendar = Some(base.join(calendar));
    }
}
