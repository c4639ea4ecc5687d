//! Calendar command - list the fasting days with progress.

use anyhow::Result;
use chrono::{NaiveDate, TimeZone};
use serde::Serialize;

use super::CommandContext;
use super::print_json;
use crate::calendar::{CalendarDay, DayStatus, FastingProgress, day_status, load_calendar, progress};

#[derive(Debug, Clone, Serialize)]
pub struct CalendarEntry {
    #[serde(flatten)]
    pub day: CalendarDay,
    pub status: DayStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarReport {
    pub today: NaiveDate,
    pub progress: FastingProgress,
    pub percent: f64,
    pub days: Vec<CalendarEntry>,
}

pub fn build_report(days: &[CalendarDay], today: NaiveDate) -> CalendarReport {
    let progress = progress(days, today);
    CalendarReport {
        today,
        progress,
        percent: progress.percent(),
        days: days
            .iter()
            .map(|day| CalendarEntry {
                day: day.clone(),
                status: day_status(day, today),
            })
            .collect(),
    }
}

/// Progress as a sentence, e.g. `"Day 12 of 30 (40%)"`.
pub fn progress_label(progress: &FastingProgress) -> String {
    if progress.is_fasting_day() {
        format!(
            "Day {} of {} ({:.0}%)",
            progress.current,
            progress.total,
            progress.percent()
        )
    } else {
        format!("Not a fasting day ({} days in calendar)", progress.total)
    }
}

/// Handle the calendar command.
pub fn run<Tz: TimeZone>(ctx: &CommandContext, zone: &Tz) -> Result<()> {
    let days = load_calendar(&ctx.config.calendar_path())?;
    let today = ctx.now_in(zone).date_naive();
    let report = build_report(&days, today);

    if ctx.json {
        return print_json(&report, false);
    }

    log_block_start!("Ramadan calendar");
    log_indented!("{}", progress_label(&report.progress));
    log_pipe!();
    for entry in &report.days {
        let marker = match entry.status {
            DayStatus::Past => " ",
            DayStatus::Today => ">",
            DayStatus::Upcoming => "·",
        };
        log_indented!(
            "{} {} {:<10} Suhoor {:>8}  Iftar {:>8}  {}",
            marker,
            entry.day.date,
            entry.day.weekday,
            entry.day.sahur_time,
            entry.day.iftar_time,
            entry.day.hijri
        );
    }
    log_end!();
    Ok(())
}

/// Display help for the calendar command.
pub fn display_help() {
    log_version!();
    log_block_start!("calendar - List the fasting calendar");
    log_block_start!("Usage: ramadan-clock calendar [--json]");
    log_block_start!("Description:");
    log_indented!("Prints every day of the calendar file with its Suhoor and Iftar");
    log_indented!("times, marks today with '>' and shows how far through the month");
    log_indented!("of fasting today is.");
    log_block_start!("Options:");
    log_indented!("--json     Output the calendar in JSON format");
    log_end!();
}
