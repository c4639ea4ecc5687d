//! Breaking command - who around the world is breaking their fast.
//!
//! Estimates today's sunset for every city on the board, classifies each
//! against the current minute and prints the ranked result. With `--follow`
//! the board is recomputed every `breaking_interval` seconds.

use anyhow::Result;
use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::{CommandContext, clock_label, print_json, rfc3339};
use crate::events::{City, EventCategory, RankedEvent, breaking_now, utc_minutes_of_day};

/// The iftar board at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct BreakingReport {
    pub now: String,
    /// Minutes past UTC midnight the board was computed for
    pub utc_minutes: u32,
    pub events: Vec<RankedEvent>,
}

impl BreakingReport {
    /// Events of one category, in ranked order.
    pub fn in_category(&self, category: EventCategory) -> impl Iterator<Item = &RankedEvent> {
        self.events.iter().filter(move |e| e.category == category)
    }
}

pub fn build_report<Tz: TimeZone>(cities: &[City], now: &DateTime<Tz>) -> BreakingReport {
    BreakingReport {
        now: rfc3339(now),
        utc_minutes: utc_minutes_of_day(now),
        events: breaking_now(cities, now),
    }
}

/// Handle the breaking command.
pub fn run<Tz: TimeZone>(ctx: &CommandContext, zone: &Tz, follow: bool) -> Result<()> {
    let cities = ctx.config.board_cities();

    if !follow {
        let now = ctx.now_in(zone);
        let report = build_report(cities, &now);
        if ctx.json {
            return print_json(&report, false);
        }
        display_board(&report, &now);
        log_end!();
        return Ok(());
    }

    let interval = ctx.config.breaking_interval();
    if !ctx.json {
        log_block_start!(
            "Following the iftar board every {}s (press Ctrl+C to stop)",
            interval.as_secs()
        );
        log_end!();
    }

    loop {
        let now = ctx.now_in(zone);
        let report = build_report(cities, &now);
        if ctx.json {
            print_json(&report, true)?;
        } else {
            println!("[{}] {}", now.naive_local().format("%H:%M:%S"), summary_line(&report));
        }
        ctx.time.sleep(interval);
    }
}

fn display_board<Tz: TimeZone>(report: &BreakingReport, now: &DateTime<Tz>) {
    log_block_start!(
        "Iftar board at {} ({:02}:{:02} UTC)",
        clock_label(now),
        report.utc_minutes / 60,
        report.utc_minutes % 60
    );

    if report.events.is_empty() {
        log_indented!("Nobody is close to sunset right now");
        return;
    }

    for category in [
        EventCategory::Occurring,
        EventCategory::Upcoming,
        EventCategory::RecentlyPassed,
    ] {
        let mut events = report.in_category(category).peekable();
        if events.peek().is_none() {
            continue;
        }
        log_block_start!("{}", category.heading());
        for event in events {
            log_indented!("{:<16} {:>8}", event.label, event.eta_label());
        }
    }
}

/// One line per refresh in follow mode.
fn summary_line(report: &BreakingReport) -> String {
    if report.events.is_empty() {
        return "nobody is close to sunset".to_string();
    }

    let mut parts = Vec::new();
    for category in [
        EventCategory::Occurring,
        EventCategory::Upcoming,
        EventCategory::RecentlyPassed,
    ] {
        let names: Vec<String> = report
            .in_category(category)
            .map(|e| format!("{} ({})", e.label, e.eta_label()))
            .collect();
        if !names.is_empty() {
            parts.push(format!("{}: {}", category.heading(), names.join(", ")));
        }
    }
    parts.join(" | ")
}

/// Display help for the breaking command.
pub fn display_help() {
    log_version!();
    log_block_start!("breaking - Cities breaking their fast around now");
    log_block_start!("Usage: ramadan-clock breaking [--follow] [--json]");
    log_block_start!("Description:");
    log_indented!("Estimates today's sunset for every city on the board and groups them:");
    log_indented!("Right now       sunset within the last 30 minutes");
    log_indented!("Up next         sunset in the next 2 hours (at most 3 cities)");
    log_indented!("Just broke      sunset 30-90 minutes ago, shown only when nothing");
    log_indented!("                is happening now or soon (at most 3 cities)");
    log_pipe!();
    log_indented!("The board can be replaced with [[cities]] entries in the config.");
    log_block_start!("Options:");
    log_indented!("--follow   Refresh every breaking_interval seconds");
    log_indented!("--json     Output the board in JSON format");
    log_block_start!("Examples:");
    log_indented!("ramadan-clock breaking");
    log_indented!("ramadan-clock breaking --at \"2026-03-20 17:50:00\"");
    log_indented!("ramadan-clock breaking --follow --json");
    log_end!();
}
