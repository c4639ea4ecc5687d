//! Configuration validation functionality.
//!
//! Rejects values that would make the engine's output meaningless:
//! coordinates off the globe, unknown time zones, refresh intervals that
//! would spin or stall, and malformed custom city tables.

use anyhow::Result;
use std::collections::HashSet;

use super::Config;
use crate::constants::*;

pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = config.longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    if let Some(city) = &config.city
        && city.trim().is_empty()
    {
        anyhow::bail!("city must not be empty");
    }

    config.zone()?;

    validate_interval(config.breaking_interval, "breaking_interval")?;
    validate_interval(config.countdown_interval, "countdown_interval")?;

    if let Some(cities) = &config.cities {
        validate_cities(cities)?;
    }

    Ok(())
}

fn validate_interval(interval: Option<u64>, field: &str) -> Result<()> {
    if let Some(secs) = interval
        && !(MINIMUM_REFRESH_INTERVAL..=MAXIMUM_REFRESH_INTERVAL).contains(&secs)
    {
        anyhow::bail!(
            "{} ({} seconds) must be between {} and {} seconds",
            field,
            secs,
            MINIMUM_REFRESH_INTERVAL,
            MAXIMUM_REFRESH_INTERVAL
        );
    }
    Ok(())
}

fn validate_cities(cities: &[crate::events::City]) -> Result<()> {
    if cities.is_empty() {
        anyhow::bail!("cities must list at least one city (remove it to use the built-in table)");
    }

    let mut seen = HashSet::new();
    for city in cities {
        let name = city.name.trim();
        if name.is_empty() {
            anyhow::bail!("every city needs a name");
        }
        if !seen.insert(name.to_lowercase()) {
            anyhow::bail!("city '{}' is listed more than once", name);
        }
        if !city.point().is_valid() {
            anyhow::bail!(
                "city '{}' has invalid coordinates ({}, {})",
                name,
                city.latitude,
                city.longitude
            );
        }
    }

    Ok(())
}
