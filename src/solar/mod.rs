//! Low-precision sunset estimation.
//!
//! Sunset is found from the sunset hour-angle equation, using a cosine
//! approximation of the solar declination (typically within a degree of the
//! true value). The result is plenty for minute-level display but is not an
//! ephemeris: there is no equation-of-time term, so estimates can be off by
//! up to a quarter of an hour depending on the season.
//!
//! ## Day coupling
//!
//! [`estimate_sunset_utc`] derives the day of year from the instant it is
//! handed, in that instant's time zone. Callers that want the sunset of some
//! other day should use [`estimate_sunset_utc_on_day`] directly.

use chrono::{DateTime, Datelike, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::{
    AXIAL_TILT_DEGREES, DAYS_PER_YEAR, DECLINATION_DAY_OFFSET, DEGREES_PER_HOUR, MINUTES_PER_DAY,
    SUNSET_ELEVATION_DEGREES,
};


/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Degrees north, -90 to +90
    pub latitude: f64,
    /// Degrees east, -180 to +180
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are inside their geographic ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Outcome of a sunset estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarEstimate {
    /// Sunset at this many minutes past UTC midnight, always in `[0, 1440)`.
    Sunset(f64),
    /// The sun never crosses the sunset elevation on this day (polar day or night).
    NoEvent,
}

impl SolarEstimate {
    /// Minutes past UTC midnight, or `None` for [`SolarEstimate::NoEvent`].
    pub fn utc_minutes(self) -> Option<f64> {
        match self {
            SolarEstimate::Sunset(minutes) => Some(minutes),
            SolarEstimate::NoEvent => None,
        }
    }

    /// The estimate as a UTC wall-clock time, rounded to the nearest second.
    pub fn utc_time(self) -> Option<NaiveTime> {
        let minutes = self.utc_minutes()?;
        let seconds = (minutes * 60.0).round() as u32 % 86_400;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
    }
}

/// Day of the year for `now` in its own time zone (1 on January 1st).
pub fn day_of_year<Tz: TimeZone>(now: &DateTime<Tz>) -> u32 {
    now.ordinal()
}

/// Approximate solar declination in degrees for the given day of year.
pub fn solar_declination(day_of_year: u32) -> f64 {
    -AXIAL_TILT_DEGREES
        * ((2.0 * PI / DAYS_PER_YEAR) * (f64::from(day_of_year) + DECLINATION_DAY_OFFSET)).cos()
}

/// Cosine of the sunset hour angle for a latitude and declination, both in degrees.
///
/// Values outside `[-1, 1]` mean the sun stays above (below -1) or below
/// (above 1) the sunset elevation for the whole day.
pub fn sunset_hour_angle_cosine(latitude: f64, declination: f64) -> f64 {
    let lat = latitude.to_radians();
    let decl = declination.to_radians();

    (SUNSET_ELEVATION_DEGREES.to_radians().sin() - lat.sin() * decl.sin())
        / (lat.cos() * decl.cos())
}

/// Fold any minute count into `[0, 1440)`.
pub fn normalize_minutes_of_day(minutes: f64) -> f64 {
    ((minutes % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY
}

/// Estimate sunset for `point` on an explicit day of the year.
pub fn estimate_sunset_utc_on_day(point: GeoPoint, day_of_year: u32) -> SolarEstimate {
    let declination = solar_declination(day_of_year);
    let cos_h = sunset_hour_angle_cosine(point.latitude, declination);

    // NaN (degenerate poles) fails the range check as well
    if !(-1.0..=1.0).contains(&cos_h) {
        return SolarEstimate::NoEvent;
    }

    let hour_angle = cos_h.acos().to_degrees();
    let minutes =
        (12.0 + hour_angle / DEGREES_PER_HOUR - point.longitude / DEGREES_PER_HOUR) * 60.0;

    SolarEstimate::Sunset(normalize_minutes_of_day(minutes))
}

/// Estimate sunset for `point` on the day `now` falls on.
pub fn estimate_sunset_utc<Tz: TimeZone>(point: GeoPoint, now: &DateTime<Tz>) -> SolarEstimate {
    estimate_sunset_utc_on_day(point, day_of_year(now))
}
