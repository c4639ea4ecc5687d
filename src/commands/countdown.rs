//! Countdown command - time until the next Suhoor or Iftaar.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

use super::{CommandContext, clock_label, print_json, rfc3339};
use crate::calendar::{CalendarDay, Countdown, FastEvent, load_calendar, next_event};

/// The next fasting boundary as seen from some instant.
#[derive(Debug, Clone, Serialize)]
pub struct CountdownReport {
    pub now: String,
    /// `None` once the last Iftaar of the calendar has passed
    pub next: Option<UpcomingBoundary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingBoundary {
    pub event: FastEvent,
    pub date: NaiveDate,
    pub at: String,
    /// Wall-clock time of the event in the display zone
    pub clock: String,
    pub remaining: Countdown,
    pub remaining_seconds: i64,
}

impl CountdownReport {
    pub fn has_ended(&self) -> bool {
        self.next.is_none()
    }

    /// `"Time until Iftaar: 01:10:05"`, or the end-of-month message.
    pub fn headline(&self) -> String {
        match &self.next {
            Some(next) => format!("Time until {}: {}", next.event, next.remaining),
            None => "Ramadan has ended".to_string(),
        }
    }
}

/// Find the next boundary after `now`. Calendar times are read in `now`'s zone.
pub fn build_report<Tz: TimeZone>(
    days: &[CalendarDay],
    now: &DateTime<Tz>,
) -> Result<CountdownReport> {
    let next = next_event(days, now)?.map(|next| {
        let remaining = Countdown::between(now, &next.instant);
        UpcomingBoundary {
            event: next.event,
            date: days[next.day_index].date,
            at: rfc3339(&next.instant),
            clock: clock_label(&next.instant),
            remaining,
            remaining_seconds: remaining.total_seconds(),
        }
    });

    Ok(CountdownReport {
        now: rfc3339(now),
        next,
    })
}

/// Handle the countdown command.
pub fn run<Tz: TimeZone>(ctx: &CommandContext, zone: &Tz, follow: bool) -> Result<()> {
    let calendar_path = ctx.config.calendar_path();
    let days = load_calendar(&calendar_path)?;

    if ctx.debug_enabled {
        log_debug!(
            "Loaded {} calendar days from {}",
            days.len(),
            calendar_path.display()
        );
    }

    if !follow {
        let report = build_report(&days, &ctx.now_in(zone))?;
        if ctx.json {
            return print_json(&report, false);
        }
        display_report(&report);
        log_end!();
        return Ok(());
    }

    let interval = ctx.config.countdown_interval();
    if !ctx.json {
        log_block_start!("Counting down (press Ctrl+C to stop)");
        log_end!();
    }

    loop {
        let report = build_report(&days, &ctx.now_in(zone))?;
        if ctx.json {
            print_json(&report, true)?;
        } else {
            println!("{}", report.headline());
        }
        if report.has_ended() {
            return Ok(());
        }
        ctx.time.sleep(interval);
    }
}

/// Show the next boundary in the decorated log style.
pub(crate) fn display_report(report: &CountdownReport) {
    log_block_start!("{}", report.headline());
    if let Some(next) = &report.next {
        log_indented!("{} on {} at {}", next.event, next.date, next.clock);
    }
}

/// Display help for the countdown command.
pub fn display_help() {
    log_version!();
    log_block_start!("countdown - Time until the next Suhoor or Iftaar");
    log_block_start!("Usage: ramadan-clock countdown [--follow] [--json]");
    log_block_start!("Description:");
    log_indented!("Reads the fasting calendar and counts down to the first Suhoor or");
    log_indented!("Iftaar after now. Calendar times are read in the configured");
    log_indented!("timezone, or the system zone when none is set.");
    log_block_start!("Options:");
    log_indented!("--follow   Refresh every countdown_interval seconds until Ramadan ends");
    log_indented!("--json     Output the countdown in JSON format");
    log_block_start!("Examples:");
    log_indented!("ramadan-clock countdown");
    log_indented!("ramadan-clock countdown --follow");
    log_indented!("ramadan-clock countdown --at \"2026-02-19 04:00:00\"");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn central() -> FixedOffset {
        FixedOffset::west_opt(6 * 3600).unwrap()
    }

    fn days() -> Vec<CalendarDay> {
        vec![
            CalendarDay::new(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(), "5:12 AM", "5:41 PM"),
            CalendarDay::new(NaiveDate::from_ymd_opt(2026, 2, 19).unwrap(), "5:10 AM", "5:43 PM"),
        ]
    }

    #[test]
    fn test_report_before_suhoor() {
        let now = central().with_ymd_and_hms(2026, 2, 19, 4, 0, 0).unwrap();
        let report = build_report(&days(), &now).unwrap();
        let next = report.next.as_ref().unwrap();

        assert_eq!(next.event, FastEvent::Suhoor);
        assert_eq!(next.date, NaiveDate::from_ymd_opt(2026, 2, 19).unwrap());
        assert_eq!(next.clock, "05:10");
        assert_eq!(next.at, "2026-02-19T05:10:00-06:00");
        assert_eq!(next.remaining_seconds, 70 * 60);
        assert_eq!(report.headline(), "Time until Suhoor: 01:10:00");
    }

    #[test]
    fn test_report_after_last_iftar() {
        let now = central().with_ymd_and_hms(2026, 2, 19, 18, 0, 0).unwrap();
        let report = build_report(&days(), &now).unwrap();

        assert!(report.has_ended());
        assert_eq!(report.headline(), "Ramadan has ended");

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["next"].is_null());
    }

    #[test]
    fn test_report_surfaces_bad_clock() {
        let broken = vec![CalendarDay::new(
            NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
            "5:12",
            "5:41 PM",
        )];
        let now = central().with_ymd_and_hms(2026, 2, 17, 12, 0, 0).unwrap();

        let err = build_report(&broken, &now).unwrap_err();
        assert!(err.to_string().contains("5:12"));
    }
}
