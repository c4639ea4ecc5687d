//! The personal fasting calendar.
//!
//! A calendar is a chronological list of [`CalendarDay`]s, one per fasting
//! day, with the local Suhoor and Iftar times published by an upstream
//! prayer-time provider. This module loads it from disk and answers the
//! questions the countdown and calendar views ask of it.
//!
//! ## Calendar file
//!
//! JSON, either an object with a `days` array or a bare array:
//!
//! ```json
//! { "days": [
//!     { "date": "2026-02-18", "day": "Wednesday", "hijri": "1 Ramadan 1447",
//!       "sahur": "5:32 AM", "iftar": "5:41 PM", "duration": "12h 9m" }
//! ] }
//! ```

pub mod clock;
pub mod countdown;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use clock::{ParseTimeError, parse_clock, parse_local_time};
pub use countdown::{Countdown, FastEvent, NextEvent, next_event};

/// One fasting day as published by the calendar provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Suhoor (end of the pre-dawn meal), e.g. `"5:10 AM"`
    #[serde(rename = "sahur", alias = "sahur_time")]
    pub sahur_time: String,
    /// Iftar (sunset), e.g. `"7:45 PM"`
    #[serde(rename = "iftar", alias = "iftar_time")]
    pub iftar_time: String,
    /// Fasting length as displayed by the provider, e.g. `"14h 35m"`
    #[serde(rename = "duration", alias = "duration_label", default)]
    pub duration_label: String,
    #[serde(rename = "day", default)]
    pub weekday: String,
    #[serde(default)]
    pub hijri: String,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, sahur_time: &str, iftar_time: &str) -> Self {
        Self {
            date,
            sahur_time: sahur_time.to_string(),
            iftar_time: iftar_time.to_string(),
            duration_label: String::new(),
            weekday: String::new(),
            hijri: String::new(),
        }
    }

    pub fn sahur_at<Tz: TimeZone>(&self, zone: &Tz) -> Result<DateTime<Tz>, ParseTimeError> {
        parse_local_time(self.date, &self.sahur_time, zone)
    }

    pub fn iftar_at<Tz: TimeZone>(&self, zone: &Tz) -> Result<DateTime<Tz>, ParseTimeError> {
        parse_local_time(self.date, &self.iftar_time, zone)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CalendarFile {
    Wrapped { days: Vec<CalendarDay> },
    Bare(Vec<CalendarDay>),
}

/// Parse calendar JSON and check that its dates run strictly forward.
pub fn parse_calendar(json: &str) -> Result<Vec<CalendarDay>> {
    let file: CalendarFile =
        serde_json::from_str(json).context("Calendar is not a list of fasting days")?;
    let days = match file {
        CalendarFile::Wrapped { days } | CalendarFile::Bare(days) => days,
    };

    for pair in days.windows(2) {
        if pair[1].date <= pair[0].date {
            anyhow::bail!(
                "Calendar dates must be in increasing order ({} follows {})",
                pair[1].date,
                pair[0].date
            );
        }
    }

    Ok(days)
}

/// Load a calendar file from disk.
pub fn load_calendar(path: &Path) -> Result<Vec<CalendarDay>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read calendar from {}", path.display()))?;
    parse_calendar(&content)
        .with_context(|| format!("Failed to parse calendar from {}", path.display()))
}

/// Where a calendar day sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Past,
    Today,
    Upcoming,
}

pub fn day_status(day: &CalendarDay, today: NaiveDate) -> DayStatus {
    match day.date.cmp(&today) {
        std::cmp::Ordering::Less => DayStatus::Past,
        std::cmp::Ordering::Equal => DayStatus::Today,
        std::cmp::Ordering::Greater => DayStatus::Upcoming,
    }
}

/// How far through the month of fasting today is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FastingProgress {
    /// 1-based position of today, or 0 when today is not a fasting day
    pub current: usize,
    pub total: usize,
}

impl FastingProgress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64 * 100.0
        }
    }

    pub fn is_fasting_day(&self) -> bool {
        self.current > 0
    }
}

pub fn progress(days: &[CalendarDay], today: NaiveDate) -> FastingProgress {
    let current = days
        .iter()
        .position(|day| day.date == today)
        .map_or(0, |index| index + 1);

    FastingProgress {
        current,
        total: days.len(),
    }
}
