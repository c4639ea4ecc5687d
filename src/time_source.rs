//! Time source abstraction for real and pinned clocks.
//!
//! Commands never read the system clock directly. They receive a
//! [`TimeSource`] so the same code path can run against the real clock or
//! against an instant given on the command line (`--at`), which is how past
//! and future days of Ramadan are previewed and how the commands are tested.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration as ChronoDuration, NaiveDateTime, TimeZone, Utc};
use std::sync::{Mutex, PoisonError};
use std::time::Duration as StdDuration;

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;

    /// Sleep for the specified duration
    fn sleep(&self, duration: StdDuration);

    /// Whether this source was pinned to a user-supplied instant
    fn is_fixed(&self) -> bool {
        false
    }
}

/// Real-time implementation that uses actual system time
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }
}

/// A clock that starts at a chosen instant.
///
/// Time only moves when [`TimeSource::sleep`] is called: the sleep happens
/// for real and the pinned instant advances by the same amount, so follow
/// mode keeps ticking from the chosen starting point.
pub struct FixedTimeSource {
    current: Mutex<DateTime<Utc>>,
}

impl FixedTimeSource {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Move the pinned instant forward without sleeping.
    pub fn advance(&self, duration: StdDuration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Ok(step) = ChronoDuration::from_std(duration)
            && let Some(next) = current.checked_add_signed(step)
        {
            *current = next;
        }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
        self.advance(duration);
    }

    fn is_fixed(&self) -> bool {
        true
    }
}

/// Parse a datetime string in the format "YYYY-MM-DD HH:MM:SS" as wall-clock time in `zone`.
///
/// A time repeated when clocks fall back resolves to the earlier instant,
/// matching how calendar clock times are read.
pub fn parse_datetime_in<Tz: TimeZone>(s: &str, zone: &Tz) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("Invalid datetime '{s}'. Use YYYY-MM-DD HH:MM:SS"))?;

    zone.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| anyhow::anyhow!("Local time '{s}' does not exist in this time zone"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_holds_until_advanced() {
        let start = Utc.with_ymd_and_hms(2026, 3, 20, 4, 0, 0).unwrap();
        let source = FixedTimeSource::new(start);

        assert!(source.is_fixed());
        assert_eq!(source.now(), start);
        assert_eq!(source.now(), start);

        source.advance(StdDuration::from_secs(90));
        assert_eq!(source.now(), start + ChronoDuration::seconds(90));
    }

    #[test]
    fn test_fixed_source_sleep_advances() {
        let start = Utc.with_ymd_and_hms(2026, 3, 20, 4, 0, 0).unwrap();
        let source = FixedTimeSource::new(start);

        source.sleep(StdDuration::from_millis(5));
        assert_eq!(source.now(), start + ChronoDuration::milliseconds(5));
    }

    #[test]
    fn test_real_source_is_not_fixed() {
        let source = RealTimeSource;
        assert!(!source.is_fixed());
        let before = Utc::now();
        assert!(source.now() >= before);
    }

    #[test]
    fn test_parse_datetime_in_zone() {
        let riyadh = chrono_tz::Asia::Riyadh;
        let parsed = parse_datetime_in("2026-03-20 18:25:00", &riyadh).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 20, 15, 25, 0).unwrap());

        assert!(parse_datetime_in("2026-03-20 18:25", &riyadh).is_err());
        assert!(parse_datetime_in("yesterday", &Utc).is_err());
    }

    #[test]
    fn test_parse_datetime_rejects_gap() {
        let new_york = chrono_tz::America::New_York;
        assert!(parse_datetime_in("2026-03-08 02:30:00", &new_york).is_err());
    }

    #[test]
    fn test_parse_datetime_fold_takes_earlier() {
        // 01:30 happens twice in New York on 2026-11-01; the first is still EDT
        let new_york = chrono_tz::America::New_York;
        let parsed = parse_datetime_in("2026-11-01 01:30:00", &new_york).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 11, 1, 5, 30, 0).unwrap());
    }
}
