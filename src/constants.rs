//! Application-wide constants.
//!
//! Astronomical constants for the sunset estimator, classification windows for
//! the iftar board, and configuration defaults and limits.

// # Astronomy

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Half of [`MINUTES_PER_DAY`]; deltas are folded into `(-HALF_DAY_MINUTES, HALF_DAY_MINUTES]`.
pub const HALF_DAY_MINUTES: f64 = 720.0;

/// Solar elevation at apparent sunset (refraction plus solar disk radius).
pub const SUNSET_ELEVATION_DEGREES: f64 = -0.833;

/// Amplitude of the declination approximation.
pub const AXIAL_TILT_DEGREES: f64 = 23.45;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Days between the December solstice and the start of the year.
pub const DECLINATION_DAY_OFFSET: f64 = 10.0;

/// Degrees of hour angle per hour of time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

// # Event windows (minutes relative to now)

/// An event this many minutes in the past (or exactly now) is still occurring.
pub const OCCURRING_WINDOW_MINUTES: f64 = 30.0;

/// Events up to this many minutes ahead are upcoming.
pub const UPCOMING_WINDOW_MINUTES: f64 = 120.0;

/// Events between the occurring window and this many minutes ago were recently passed.
pub const RECENT_WINDOW_MINUTES: f64 = 90.0;

pub const MAX_UPCOMING_EVENTS: usize = 3;
pub const MAX_RECENT_EVENTS: usize = 3;

// # Configuration

pub const APP_DIR_NAME: &str = "ramadan-clock";
pub const CONFIG_FILE_NAME: &str = "ramadan-clock.toml";
pub const DEFAULT_CALENDAR_FILE: &str = "calendar.json";

/// Urbana, Illinois
pub const DEFAULT_LATITUDE: f64 = 40.1106;
pub const DEFAULT_LONGITUDE: f64 = -88.2073;
pub const DEFAULT_CITY: &str = "Urbana";

/// Seconds between iftar board refreshes in follow mode.
pub const DEFAULT_BREAKING_INTERVAL: u64 = 30;
/// Seconds between countdown refreshes in follow mode.
pub const DEFAULT_COUNTDOWN_INTERVAL: u64 = 1;

pub const MINIMUM_REFRESH_INTERVAL: u64 = 1;
pub const MAXIMUM_REFRESH_INTERVAL: u64 = 3600;

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
pub mod test_constants {
    //! Fixtures shared by unit tests.

    pub const MECCA_LATITUDE: f64 = 21.39;
    pub const MECCA_LONGITUDE: f64 = 39.83;

    /// 2026-03-20, close to the March equinox.
    pub const EQUINOX_DAY_OF_YEAR: u32 = 79;

    pub const JUNE_SOLSTICE_DAY_OF_YEAR: u32 = 172;
    pub const DECEMBER_SOLSTICE_DAY_OF_YEAR: u32 = 355;
}
