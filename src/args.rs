//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags, location overrides, and an optional date.

use chrono::NaiveDate;

use crate::config::Overrides;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the event table with these settings
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
        /// Date to compute; today in the location's zone when absent
        date: Option<NaiveDate>,
        overrides: Overrides,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown or invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped. Values for `--lat`
    /// and `--lon` may be negative, so they are taken verbatim from the next
    /// argument even when it starts with a dash.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;
        let mut date: Option<NaiveDate> = None;
        let mut overrides = Overrides::default();

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--config" | "-c" => {
                    // Parse: --config <directory>
                    if i + 1 < args_vec.len() && !args_vec[i + 1].starts_with('-') {
                        config_dir = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        log_warning!("Missing directory for --config. Usage: --config <directory>");
                        unknown_arg_found = true;
                    }
                }
                "--lat" | "--latitude" => {
                    match parse_degrees(&args_vec, i, "--lat") {
                        Some(value) => overrides.latitude = Some(value),
                        None => unknown_arg_found = true,
                    }
                    i += 1;
                }
                "--lon" | "--longitude" => {
                    match parse_degrees(&args_vec, i, "--lon") {
                        Some(value) => overrides.longitude = Some(value),
                        None => unknown_arg_found = true,
                    }
                    i += 1;
                }
                "--tz" | "--timezone" => {
                    if i + 1 < args_vec.len() && !args_vec[i + 1].starts_with('-') {
                        overrides.timezone = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        log_warning!("Missing zone name for --tz. Usage: --tz <Area/City>");
                        unknown_arg_found = true;
                    }
                }
                _ => {
                    if arg_str.starts_with('-') {
                        log_warning!("Unknown option: {arg_str}");
                        unknown_arg_found = true;
                    } else if date.is_some() {
                        log_warning!("Unexpected argument: {arg_str}");
                        unknown_arg_found = true;
                    } else {
                        match NaiveDate::parse_from_str(arg_str, "%Y-%m-%d") {
                            Ok(parsed) => date = Some(parsed),
                            Err(_) => {
                                log_warning!("Invalid date: '{arg_str}'. Use YYYY-MM-DD");
                                unknown_arg_found = true;
                            }
                        }
                    }
                }
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else {
            CliAction::Run {
                debug_enabled,
                config_dir,
                date,
                overrides,
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Parse the value following a coordinate flag at `flag_idx`.
fn parse_degrees(args: &[String], flag_idx: usize, flag: &str) -> Option<f64> {
    let Some(raw) = args.get(flag_idx + 1) else {
        log_warning!("Missing value for {flag}. Usage: {flag} <degrees>");
        return None;
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            log_warning!("Invalid value for {flag}: {raw}");
            None
        }
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("sunclock [OPTIONS] [DATE]");
    log_block_start!("Arguments:");
    log_indented!("DATE                   Date as YYYY-MM-DD (default: today)");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("    --lat <degrees>    Latitude, overrides the configuration");
    log_indented!("    --lon <degrees>    Longitude, overrides the configuration");
    log_indented!("    --tz <Area/City>   IANA time zone, overrides the configuration");
    log_indented!("-d, --debug            Show every solver step");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_end!();
}
