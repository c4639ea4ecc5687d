//! Sunset command - estimated sunset for one coordinate.

use anyhow::Result;
use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::{CommandContext, clock_label, print_json, rfc3339};
use crate::solar::{GeoPoint, day_of_year, estimate_sunset_utc};

#[derive(Debug, Clone, Serialize)]
pub struct SunsetReport {
    pub label: String,
    pub location: GeoPoint,
    pub day_of_year: u32,
    /// Minutes past UTC midnight, absent during polar day or night
    pub utc_minutes: Option<f64>,
    /// `HH:MM` UTC
    pub sunset_utc: Option<String>,
    /// The estimate as an instant in the display zone
    pub sunset_local: Option<String>,
    #[serde(skip)]
    pub local_clock: Option<String>,
}

impl SunsetReport {
    pub fn has_sunset(&self) -> bool {
        self.utc_minutes.is_some()
    }
}

/// Estimate the sunset of `now`'s day at `point`.
///
/// The local instant is placed on `now`'s UTC date.
pub fn build_report<Tz: TimeZone>(
    label: &str,
    point: GeoPoint,
    now: &DateTime<Tz>,
) -> SunsetReport {
    let estimate = estimate_sunset_utc(point, now);
    let local = estimate.utc_time().map(|time| {
        now.naive_utc()
            .date()
            .and_time(time)
            .and_utc()
            .with_timezone(&now.timezone())
    });

    SunsetReport {
        label: label.to_string(),
        location: point,
        day_of_year: day_of_year(now),
        utc_minutes: estimate.utc_minutes(),
        sunset_utc: estimate.utc_time().map(|t| t.format("%H:%M").to_string()),
        sunset_local: local.as_ref().map(rfc3339),
        local_clock: local.as_ref().map(clock_label),
    }
}

/// Coordinate rendered as `"21.3900°, 39.8300°"`.
pub fn coordinate_label(point: GeoPoint) -> String {
    format!("{:.4}°, {:.4}°", point.latitude, point.longitude)
}

/// Handle the sunset command.
pub fn run<Tz: TimeZone>(
    ctx: &CommandContext,
    zone: &Tz,
    coordinates: Option<GeoPoint>,
) -> Result<()> {
    let (label, point) = match coordinates {
        Some(point) => (coordinate_label(point), point),
        None => (ctx.config.city_name().to_string(), ctx.config.location()),
    };

    let now = ctx.now_in(zone);
    let report = build_report(&label, point, &now);

    if ctx.json {
        return print_json(&report, false);
    }

    display_report(&report);
    log_end!();
    Ok(())
}

pub(crate) fn display_report(report: &SunsetReport) {
    log_block_start!("Sunset estimate for {}", report.label);
    log_indented!(
        "Location: {} (day {} of the year)",
        coordinate_label(report.location),
        report.day_of_year
    );

    match (&report.sunset_utc, &report.local_clock) {
        (Some(utc), Some(local)) => log_decorated!("Sunset: {} UTC, {} local", utc, local),
        _ => log_indented!("No sunset today (polar day or night)"),
    }
}

/// Display help for the sunset command.
pub fn display_help() {
    log_version!();
    log_block_start!("sunset - Estimated sunset for a location");
    log_block_start!("Usage: ramadan-clock sunset [<latitude> <longitude>]");
    log_block_start!("Description:");
    log_indented!("Estimates today's sunset from the solar declination. Accurate to a");
    log_indented!("few minutes, and up to about a quarter hour in some seasons.");
    log_indented!("Without coordinates, the configured location is used.");
    log_block_start!("Arguments:");
    log_indented!("latitude   Degrees north, -90 to 90 (south is negative)");
    log_indented!("longitude  Degrees east, -180 to 180 (west is negative)");
    log_block_start!("Examples:");
    log_indented!("ramadan-clock sunset");
    log_indented!("ramadan-clock sunset 21.39 39.83");
    log_indented!("ramadan-clock sunset -33.87 151.21 --json");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;
    use chrono::Utc;

    #[test]
    fn test_report_for_mecca_in_riyadh_time() {
        let riyadh = chrono_tz::Asia::Riyadh;
        let now = riyadh.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap();
        let report = build_report("Mecca", GeoPoint::new(MECCA_LATITUDE, MECCA_LONGITUDE), &now);

        assert!(report.has_sunset());
        assert_eq!(report.day_of_year, EQUINOX_DAY_OF_YEAR);
        assert_eq!(report.sunset_utc.as_deref(), Some("15:22"));
        let local = report.sunset_local.unwrap();
        assert!(local.starts_with("2026-03-20T18:22"), "{local}");
        assert!(local.ends_with("+03:00"));
        assert_eq!(report.local_clock.as_deref(), Some("18:22"));
    }

    #[test]
    fn test_report_without_sunset() {
        let now = Utc.with_ymd_and_hms(2026, 6, 21, 12, 0, 0).unwrap();
        let report = build_report("Longyearbyen", GeoPoint::new(78.22, 15.65), &now);

        assert!(!report.has_sunset());
        assert!(report.sunset_utc.is_none());
        assert!(report.sunset_local.is_none());
        assert!(report.local_clock.is_none());
    }

    #[test]
    fn test_coordinate_label() {
        assert_eq!(coordinate_label(GeoPoint::new(-33.87, 151.21)), "-33.8700°, 151.2100°");
    }
}
