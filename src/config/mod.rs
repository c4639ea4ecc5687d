//! Configuration system for ramadan-clock.
//!
//! Settings live in `ramadan-clock.toml`, looked up in this order:
//! 1. The directory given with `--config <dir>`
//! 2. **XDG_CONFIG_HOME**/ramadan-clock/ramadan-clock.toml
//!
//! A commented default file is written on first run.
//!
//! ## Configuration Structure
//!
//! ```toml
//! #[Location]
//! latitude = 40.1106            # Your latitude (-90 to 90)
//! longitude = -88.2073          # Your longitude (-180 to 180)
//! city = "Urbana"               # Name shown in headers
//! timezone = "America/Chicago"  # IANA zone for calendar times (default: system zone)
//!
//! #[Calendar]
//! calendar = "calendar.json"    # Fasting calendar, relative to this directory
//!
//! #[Refresh]
//! breaking_interval = 30        # Seconds between iftar board updates (1-3600)
//! countdown_interval = 1        # Seconds between countdown updates (1-3600)
//!
//! #[Iftar board]
//! [[cities]]                    # Replaces the built-in 22 cities when present
//! name = "Jakarta"
//! latitude = -6.21
//! longitude = 106.85
//! ```
//!
//! Every field is optional. Out-of-range values are rejected when the file is
//! loaded rather than when they are first used.

pub mod builder;
pub mod loading;
pub mod validation;


use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::*;
use crate::events::{City, REFERENCE_CITIES};
use crate::solar::GeoPoint;

pub use builder::create_default_config;
pub use loading::{get_config_path, load, load_from_path};

/// Settings loaded from `ramadan-clock.toml`.
///
/// All fields are optional in the file; the accessor methods supply defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    /// IANA time zone name used to read calendar clock times
    pub timezone: Option<String>,
    /// Calendar file; relative paths are resolved against the config directory on load
    pub calendar: Option<PathBuf>,
    pub breaking_interval: Option<u64>, // seconds
    pub countdown_interval: Option<u64>, // seconds
    /// Replacement for the built-in iftar board
    pub cities: Option<Vec<City>>,
}

impl Config {
    /// The user's own coordinate.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(
            self.latitude.unwrap_or(DEFAULT_LATITUDE),
            self.longitude.unwrap_or(DEFAULT_LONGITUDE),
        )
    }

    pub fn city_name(&self) -> &str {
        self.city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    /// Configured zone, or `None` to use the system zone.
    pub fn zone(&self) -> Result<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|e| anyhow::anyhow!("{e}"))
                    .with_context(|| format!("Unknown time zone '{name}'"))
            })
            .transpose()
    }

    pub fn calendar_path(&self) -> PathBuf {
        self.calendar
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CALENDAR_FILE))
    }

    /// Cities shown on the iftar board.
    pub fn board_cities(&self) -> &[City] {
        self.cities.as_deref().unwrap_or(REFERENCE_CITIES)
    }

    pub fn breaking_interval(&self) -> Duration {
        Duration::from_secs(self.breaking_interval.unwrap_or(DEFAULT_BREAKING_INTERVAL))
    }

    pub fn countdown_interval(&self) -> Duration {
        Duration::from_secs(self.countdown_interval.unwrap_or(DEFAULT_COUNTDOWN_INTERVAL))
    }

    /// Print the effective settings.
    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        let location = self.location();
        log_indented!(
            "Location: {} ({:.4}°, {:.4}°)",
            self.city_name(),
            location.latitude,
            location.longitude
        );
        log_indented!(
            "Time zone: {}",
            self.timezone.as_deref().unwrap_or("system local")
        );
        log_indented!("Calendar: {}", self.calendar_path().display());
        log_indented!(
            "Refresh: board every {}s, countdown every {}s",
            self.breaking_interval().as_secs(),
            self.countdown_interval().as_secs()
        );
        match &self.cities {
            Some(cities) => log_indented!("Iftar board: {} custom cities", cities.len()),
            None => log_indented!("Iftar board: {} reference cities", REFERENCE_CITIES.len()),
        }
    }
}
