//! Default configuration file generation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;

/// Render the commented default configuration.
pub fn default_config_contents() -> String {
    format!(
        r#"#[Location]
latitude = {DEFAULT_LATITUDE}          # Your latitude (-90 to 90)
longitude = {DEFAULT_LONGITUDE}        # Your longitude (-180 to 180)
city = "{DEFAULT_CITY}"              # Name shown in headers
# timezone = "America/Chicago"  # IANA zone for calendar times (default: system zone)

#[Calendar]
calendar = "{DEFAULT_CALENDAR_FILE}"    # Fasting calendar (JSON), relative to this directory

#[Refresh]
breaking_interval = {DEFAULT_BREAKING_INTERVAL}        # Seconds between iftar board updates ({MINIMUM_REFRESH_INTERVAL}-{MAXIMUM_REFRESH_INTERVAL})
countdown_interval = {DEFAULT_COUNTDOWN_INTERVAL}        # Seconds between countdown updates ({MINIMUM_REFRESH_INTERVAL}-{MAXIMUM_REFRESH_INTERVAL})

#[Iftar board]
# Uncomment to replace the built-in list of 22 cities
# [[cities]]
# name = "Jakarta"
# latitude = -6.21
# longitude = 106.85
"#
    )
}

/// Write the default configuration to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory {}", parent.display())
        })?;
    }

    fs::write(path, default_config_contents())
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration");
    log_indented!("{}", path.display());

    Ok(())
}
