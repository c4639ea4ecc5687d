//! Main application entry point and high-level flow coordination.
//!
//! The flow is:
//! 1. Argument parsing and early exit for help/version
//! 2. Optional file logging and JSON mode
//! 3. Configuration loading and validation
//! 4. Choosing the clock (real, or pinned with `--at`)
//! 5. Dispatch to the command
//!
//! Errors from any step end up in a single `┗[ERROR]` line and exit code 1.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;

use ramadan_clock::args::{self, CliAction, GlobalOptions, ParsedArgs};
use ramadan_clock::commands::{self, CommandContext};
use ramadan_clock::config::{self, Config};
use ramadan_clock::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use ramadan_clock::logger::Log;
use ramadan_clock::time_source::{FixedTimeSource, RealTimeSource, TimeSource, parse_datetime_in};
use ramadan_clock::{log_debug, log_error_exit, log_pipe, log_version};

fn main() {
    let parsed = ParsedArgs::from_env();

    match parsed.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            std::process::exit(EXIT_SUCCESS);
        }
        CliAction::ShowHelp => {
            args::display_help();
            std::process::exit(EXIT_SUCCESS);
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Help { ref command } => {
            let _ = commands::help::run_help_command(command.as_deref());
            std::process::exit(EXIT_SUCCESS);
        }
        _ => {}
    }

    // Kept alive until the error (if any) is written so buffered lines reach the file
    let log_guard = match &parsed.options.log_file {
        Some(path) => match Log::start_file_logging(path.clone()) {
            Ok(guard) => Some(guard),
            Err(e) => {
                log_error_exit!("Failed to open log file {}: {:#}", path, e);
                std::process::exit(EXIT_FAILURE);
            }
        },
        None => None,
    };

    if let Err(e) = run(&parsed.action, &parsed.options) {
        // JSON mode silences the logger, so errors must still reach stderr
        if parsed.options.json {
            eprintln!("Error: {e:#}");
        } else {
            log_error_exit!("{:#}", e);
        }
        drop(log_guard);
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(action: &CliAction, options: &GlobalOptions) -> Result<()> {
    if options.json {
        Log::set_enabled(false);
    }

    log_version!();
    if options.debug_enabled {
        log_pipe!();
        log_debug!("Debug mode enabled");
    }

    let config = config::load(options.config_dir.as_deref().map(Path::new))?;
    if options.debug_enabled {
        config.log_config();
    }

    let time = time_source(&config, options.at.as_deref())?;
    let ctx = CommandContext {
        config: &config,
        time: time.as_ref(),
        json: options.json,
        debug_enabled: options.debug_enabled,
    };

    commands::run(action, &ctx)
}

/// The real clock, or one pinned to `--at` read in the display zone.
fn time_source(config: &Config, at: Option<&str>) -> Result<Box<dyn TimeSource>> {
    let Some(at) = at else {
        return Ok(Box::new(RealTimeSource));
    };

    let start = match config.zone()? {
        Some(zone) => parse_datetime_in(at, &zone),
        None => parse_datetime_in(at, &Local),
    }
    .context("Invalid --at value")?;

    Ok(Box::new(FixedTimeSource::new(start)))
}
