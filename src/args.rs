//! Command-line argument parsing and processing.
//!
//! Arguments are hand-parsed: global flags may appear anywhere, the first
//! positional argument selects the command and the rest are its operands.
//! Tokens such as `-88.2` are read as numbers, not flags, so western and
//! southern coordinates can be passed to `sunset` directly.

use crate::solar::GeoPoint;

/// Flags shared by every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalOptions {
    pub debug_enabled: bool,
    /// Print JSON instead of the decorated log output
    pub json: bool,
    pub config_dir: Option<String>,
    /// Pin "now" to `YYYY-MM-DD HH:MM:SS` in the configured zone
    pub at: Option<String>,
    pub log_file: Option<String>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// No command given: sunset estimate plus the next fasting boundary
    Overview,
    /// Who is breaking their fast around the world
    Breaking { follow: bool },
    /// Time until the next Suhoor or Iftaar
    Countdown { follow: bool },
    /// The fasting calendar with progress
    Calendar,
    /// Sunset estimate for the configured location or an explicit coordinate
    Sunset { coordinates: Option<GeoPoint> },
    /// `help [COMMAND]`
    Help { command: Option<String> },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
#[derive(Debug)]
pub struct ParsedArgs {
    pub action: CliAction,
    pub options: GlobalOptions,
}

/// A token that begins with `-` but is really a (negative) number.
fn is_numeric(arg: &str) -> bool {
    arg.parse::<f64>().is_ok()
}

fn is_flag(arg: &str) -> bool {
    arg.starts_with('-') && !is_numeric(arg)
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped. Version takes
    /// precedence over help, and help over any argument error.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut options = GlobalOptions::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut follow = false;
        let mut unknown_arg_found = false;
        let mut positionals: Vec<String> = Vec::new();

        let mut i = 0;
        while i < args_vec.len() {
            let arg = args_vec[i].as_str();
            match arg {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--json" | "-j" => options.json = true,
                "--follow" | "-f" => follow = true,
                "--config" | "-c" | "--at" | "--log" => {
                    match args_vec.get(i + 1).filter(|next| !is_flag(next)) {
                        Some(value) => {
                            let value = Some(value.clone());
                            match arg {
                                "--at" => options.at = value,
                                "--log" => options.log_file = value,
                                _ => options.config_dir = value,
                            }
                            i += 1;
                        }
                        None => {
                            let usage = match arg {
                                "--at" => "--at \"YYYY-MM-DD HH:MM:SS\"",
                                "--log" => "--log <file>",
                                _ => "--config <directory>",
                            };
                            log_warning!("Missing value for {}. Usage: {}", arg, usage);
                            unknown_arg_found = true;
                        }
                    }
                }
                _ if is_flag(arg) => {
                    log_warning!("Unknown option: {arg}");
                    unknown_arg_found = true;
                }
                _ => positionals.push(arg.to_string()),
            }
            i += 1;
        }

        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
                options,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
                options,
            };
        }

        let action = if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else {
            parse_command(&positionals, follow)
        };

        ParsedArgs { action, options }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Map the positional arguments onto a command.
fn parse_command(positionals: &[String], follow: bool) -> CliAction {
    let Some((command, operands)) = positionals.split_first() else {
        if follow {
            log_warning!("--follow needs a command. Usage: ramadan-clock breaking --follow");
            return CliAction::ShowHelpDueToError;
        }
        return CliAction::Overview;
    };

    let takes_follow = matches!(command.as_str(), "breaking" | "b" | "countdown" | "cd");
    if follow && !takes_follow {
        log_warning!("--follow only applies to the breaking and countdown commands");
        return CliAction::ShowHelpDueToError;
    }

    let max_operands = match command.as_str() {
        "sunset" | "s" => 2,
        "help" | "h" => 1,
        _ => 0,
    };
    if operands.len() > max_operands {
        log_warning!(
            "Unexpected argument '{}' for command '{}'",
            operands[max_operands],
            command
        );
        return CliAction::ShowHelpDueToError;
    }

    match command.as_str() {
        "breaking" | "b" => CliAction::Breaking { follow },
        "countdown" | "cd" => CliAction::Countdown { follow },
        "calendar" | "cal" => CliAction::Calendar,
        "sunset" | "s" => parse_sunset(operands),
        "help" | "h" => CliAction::Help {
            command: operands.first().cloned(),
        },
        _ => {
            log_warning!("Unknown command: {}", command);
            CliAction::ShowHelpDueToError
        }
    }
}

/// `sunset` takes either no operands or a latitude and a longitude.
fn parse_sunset(operands: &[String]) -> CliAction {
    match operands {
        [] => CliAction::Sunset { coordinates: None },
        [lat, lon] => match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) => {
                let point = GeoPoint::new(latitude, longitude);
                if point.is_valid() {
                    CliAction::Sunset {
                        coordinates: Some(point),
                    }
                } else {
                    log_warning!(
                        "Coordinates out of range: latitude must be -90..90, longitude -180..180"
                    );
                    CliAction::ShowHelpDueToError
                }
            }
            _ => {
                log_warning!("Invalid coordinates. Usage: ramadan-clock sunset <lat> <lon>");
                CliAction::ShowHelpDueToError
            }
        },
        _ => {
            log_warning!("Missing longitude. Usage: ramadan-clock sunset <lat> <lon>");
            CliAction::ShowHelpDueToError
        }
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("ramadan-clock [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-j, --json             Print machine-readable JSON");
    log_indented!("-f, --follow           Keep refreshing (breaking, countdown)");
    log_indented!("    --at <datetime>    Pretend it is \"YYYY-MM-DD HH:MM:SS\" (local)");
    log_indented!("    --log <file>       Write log output to a file");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("breaking, b            Cities breaking their fast around now");
    log_indented!("countdown, cd          Time until the next Suhoor or Iftaar");
    log_indented!("calendar, cal          Fasting calendar with progress");
    log_indented!("sunset, s [<lat> <lon>] Estimated sunset for a location");
    log_indented!("help, h [COMMAND]      Show detailed help for a command");
    log_pipe!();
    log_indented!("Without a command, shows today's sunset and the next fasting boundary.");
    log_end!();
}
