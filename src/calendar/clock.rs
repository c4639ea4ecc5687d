//! Parsing of 12-hour clock strings such as `"5:10 AM"`.
//!
//! Calendar providers publish Suhoor and Iftar as local wall-clock times in
//! `H:MM AM|PM` form. These helpers turn them into concrete instants on a
//! given date in a given zone.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,2}):(\d{2})\s+([AaPp][Mm])\s*$").expect("clock pattern is valid")
});

/// Failure to turn a clock string into an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTimeError {
    /// The string is not `H:MM AM|PM` with an hour of 1-12 and minutes of 0-59.
    Malformed { input: String },
    /// The wall-clock time falls in a daylight-saving gap.
    NonexistentLocalTime { date: NaiveDate, time: NaiveTime },
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTimeError::Malformed { input } => {
                write!(f, "Malformed clock time '{input}' (expected H:MM AM or H:MM PM)")
            }
            ParseTimeError::NonexistentLocalTime { date, time } => {
                write!(f, "{date} {time} does not exist in the local time zone")
            }
        }
    }
}

impl std::error::Error for ParseTimeError {}

/// Parse `"H:MM AM"` / `"H:MM PM"` into a 24-hour wall-clock time.
pub fn parse_clock(clock: &str) -> Result<NaiveTime, ParseTimeError> {
    let malformed = || ParseTimeError::Malformed {
        input: clock.to_string(),
    };

    let captures = CLOCK_PATTERN.captures(clock).ok_or_else(malformed)?;
    let mut hour: u32 = captures[1].parse().map_err(|_| malformed())?;
    let minute: u32 = captures[2].parse().map_err(|_| malformed())?;
    let is_pm = captures[3].eq_ignore_ascii_case("pm");

    if !(1..=12).contains(&hour) {
        return Err(malformed());
    }

    if is_pm && hour != 12 {
        hour += 12;
    } else if !is_pm && hour == 12 {
        hour = 0;
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// Combine `date` with a 12-hour `clock` string as wall-clock time in `zone`.
///
/// When the wall-clock time occurs twice (clocks falling back) the earlier
/// instant wins.
pub fn parse_local_time<Tz: TimeZone>(
    date: NaiveDate,
    clock: &str,
    zone: &Tz,
) -> Result<DateTime<Tz>, ParseTimeError> {
    let time = parse_clock(clock)?;
    zone.from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or(ParseTimeError::NonexistentLocalTime { date, time })
}
