//! The next Suhoor or Iftaar and the time remaining until it.

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt;

use super::{CalendarDay, ParseTimeError};

/// The two daily fasting boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FastEvent {
    Suhoor,
    Iftaar,
}

impl FastEvent {
    pub fn label(self) -> &'static str {
        match self {
            FastEvent::Suhoor => "Suhoor",
            FastEvent::Iftaar => "Iftaar",
        }
    }
}

impl fmt::Display for FastEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The first fasting boundary after some instant.
#[derive(Debug, Clone)]
pub struct NextEvent<Tz: TimeZone> {
    pub event: FastEvent,
    pub instant: DateTime<Tz>,
    /// Index into the calendar of the day the event belongs to
    pub day_index: usize,
}

/// Find the first Suhoor or Iftaar strictly after `now`.
///
/// Days are scanned in order and, within a day, Suhoor is checked before
/// Iftaar. Clock strings are interpreted in `now`'s zone. `Ok(None)` means
/// every event in the calendar is over.
pub fn next_event<Tz: TimeZone>(
    days: &[CalendarDay],
    now: &DateTime<Tz>,
) -> Result<Option<NextEvent<Tz>>, ParseTimeError> {
    let zone = now.timezone();

    for (day_index, day) in days.iter().enumerate() {
        let sahur = day.sahur_at(&zone)?;
        if sahur > *now {
            return Ok(Some(NextEvent {
                event: FastEvent::Suhoor,
                instant: sahur,
                day_index,
            }));
        }

        let iftar = day.iftar_at(&zone)?;
        if iftar > *now {
            return Ok(Some(NextEvent {
                event: FastEvent::Iftaar,
                instant: iftar,
                day_index,
            }));
        }
    }

    Ok(None)
}

/// Whole hours, minutes and seconds remaining, rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Time from `now` until `target`; zero once the target has passed.
    pub fn between<Tz: TimeZone>(now: &DateTime<Tz>, target: &DateTime<Tz>) -> Self {
        let total = target
            .clone()
            .signed_duration_since(now.clone())
            .num_seconds()
            .max(0);

        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
