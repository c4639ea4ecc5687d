//! Help command implementation for ramadan-clock.
//!
//! This module provides a dispatcher for the help command that shows
//! command-specific help or general help based on the arguments provided.

use anyhow::Result;

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("breaking") | Some("b") => super::breaking::display_help(),
        Some("calendar") | Some("cal") => super::calendar::display_help(),
        Some("countdown") | Some("cd") => super::countdown::display_help(),
        Some("help") | Some("h") => display_help_help(),
        Some("sunset") | Some("s") => super::sunset::display_help(),
        Some(unknown) => {
            log_warning_standalone!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("breaking, b              Cities breaking their fast around now");
    log_indented!("calendar, cal            Fasting calendar with progress");
    log_indented!("countdown, cd            Time until the next Suhoor or Iftaar");
    log_indented!("help, h [COMMAND]        Show detailed help for a command");
    log_indented!("sunset, s [<lat> <lon>]  Estimated sunset for a location");
    log_pipe!();
    log_info!("Use 'ramadan-clock help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'ramadan-clock --help' to see all options and general usage.");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: ramadan-clock help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("# Show general help");
    log_indented!("ramadan-clock help");
    log_pipe!();
    log_indented!("# Show help for specific commands");
    log_indented!("ramadan-clock help breaking");
    log_indented!("ramadan-clock help countdown");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_dispatch_accepts_every_command() {
        for command in [
            None,
            Some("breaking"),
            Some("cal"),
            Some("countdown"),
            Some("h"),
            Some("sunset"),
            Some("suhoor"),
        ] {
            assert!(run_help_command(command).is_ok());
        }
    }
}
