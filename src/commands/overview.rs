//! Default view when no command is given.
//!
//! Shows the sunset estimate for the configured location and, when a
//! calendar file is present, the countdown to the next fasting boundary.

use anyhow::Result;
use chrono::TimeZone;
use serde::Serialize;

use super::countdown::{self, CountdownReport};
use super::sunset::{self, SunsetReport};
use super::{CommandContext, print_json};
use crate::calendar::{FastingProgress, load_calendar, progress};

#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    pub sunset: SunsetReport,
    /// Absent when there is no calendar file
    pub countdown: Option<CountdownReport>,
    pub progress: Option<FastingProgress>,
}

pub fn run<Tz: TimeZone>(ctx: &CommandContext, zone: &Tz) -> Result<()> {
    let now = ctx.now_in(zone);
    let sunset = sunset::build_report(ctx.config.city_name(), ctx.config.location(), &now);

    let calendar_path = ctx.config.calendar_path();
    let (countdown, progress) = if calendar_path.exists() {
        let days = load_calendar(&calendar_path)?;
        (
            Some(countdown::build_report(&days, &now)?),
            Some(progress(&days, now.date_naive())),
        )
    } else {
        (None, None)
    };

    let report = OverviewReport {
        sunset,
        countdown,
        progress,
    };

    if ctx.json {
        return print_json(&report, false);
    }

    sunset::display_report(&report.sunset);
    match (&report.countdown, &report.progress) {
        (Some(countdown), Some(progress)) => {
            countdown::display_report(countdown);
            log_indented!("{}", super::calendar::progress_label(progress));
        }
        _ => {
            log_pipe!();
            log_warning!("No calendar at {}", calendar_path.display());
            log_indented!("Add one to enable the Suhoor and Iftaar countdown");
        }
    }
    log_end!();
    Ok(())
}
