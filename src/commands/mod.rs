//! Command handlers for ramadan-clock.
//!
//! Each command lives in its own submodule with a `build_report` function
//! that computes a serializable report from plain inputs, and a `run`
//! function that loads what it needs, reads the clock and prints the report.
//! All commands are generic over the display time zone: the configured IANA
//! zone when there is one, the system zone otherwise.

pub mod breaking;
pub mod calendar;
pub mod countdown;
pub mod help;
pub mod overview;
pub mod sunset;

use anyhow::Result;
use chrono::{DateTime, Local, Offset, TimeZone};
use serde::Serialize;
use std::io::Write;

use crate::args::CliAction;
use crate::config::Config;
use crate::time_source::TimeSource;

/// Everything a command needs besides its own arguments.
pub struct CommandContext<'a> {
    pub config: &'a Config,
    pub time: &'a dyn TimeSource,
    pub json: bool,
    pub debug_enabled: bool,
}

impl CommandContext<'_> {
    /// The current instant in `zone`.
    pub fn now_in<Tz: TimeZone>(&self, zone: &Tz) -> DateTime<Tz> {
        self.time.now().with_timezone(zone)
    }
}

/// Run a command action in the configured display zone.
///
/// Help and version actions are handled by the caller and are ignored here.
pub fn run(action: &CliAction, ctx: &CommandContext) -> Result<()> {
    match ctx.config.zone()? {
        Some(zone) => dispatch(action, ctx, &zone),
        None => dispatch(action, ctx, &Local),
    }
}

fn dispatch<Tz: TimeZone>(action: &CliAction, ctx: &CommandContext, zone: &Tz) -> Result<()> {
    if ctx.debug_enabled {
        let now = ctx.now_in(zone);
        log_debug!(
            "Now: {}{}",
            rfc3339(&now),
            if ctx.time.is_fixed() { " (pinned)" } else { "" }
        );
    }

    match action {
        CliAction::Overview => overview::run(ctx, zone),
        CliAction::Breaking { follow } => breaking::run(ctx, zone, *follow),
        CliAction::Countdown { follow } => countdown::run(ctx, zone, *follow),
        CliAction::Calendar => calendar::run(ctx, zone),
        CliAction::Sunset { coordinates } => sunset::run(ctx, zone, *coordinates),
        CliAction::Help { command } => help::run_help_command(command.as_deref()),
        CliAction::ShowHelp | CliAction::ShowVersion | CliAction::ShowHelpDueToError => Ok(()),
    }
}

/// RFC 3339 rendering that works for any zone.
pub fn rfc3339<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.with_timezone(&instant.offset().fix()).to_rfc3339()
}

/// Wall-clock `HH:MM` in the instant's own zone.
pub fn clock_label<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.naive_local().format("%H:%M").to_string()
}

/// Print a report as JSON.
///
/// Follow mode streams one compact object per line; one-shot output is pretty-printed.
pub fn print_json<T: Serialize>(report: &T, streaming: bool) -> Result<()> {
    if streaming {
        println!("{}", serde_json::to_string(report)?);
        std::io::stdout().flush()?;
    } else {
        println!("{}", serde_json::to_string_pretty(report)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_rfc3339_keeps_zone_offset() {
        let riyadh = chrono_tz::Asia::Riyadh;
        let instant = Utc
            .with_ymd_and_hms(2026, 3, 20, 15, 25, 0)
            .unwrap()
            .with_timezone(&riyadh);

        assert_eq!(rfc3339(&instant), "2026-03-20T18:25:00+03:00");
        assert_eq!(clock_label(&instant), "18:25");
    }
}
