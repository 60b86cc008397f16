//! Main application entry point.
//!
//! Parses the command line, loads the configuration, applies overrides and
//! prints the sunrise/sunset table for the requested date. With `--debug`
//! every solver step is shown as well.

use anyhow::Result;
use chrono::{NaiveDate, Utc};

use sunclock::args::{self, CliAction, ParsedArgs};
use sunclock::common::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use sunclock::config::{self, Overrides, ResolvedConfig};
use sunclock::solar::{SolarEvent, display};
use sunclock::{
    log_block_start, log_debug, log_decorated, log_end, log_error_exit, log_indented, log_info, log_pipe,
    log_version,
};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let code = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            EXIT_SUCCESS
        }
        CliAction::ShowHelp => {
            args::display_help();
            EXIT_SUCCESS
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            EXIT_FAILURE
        }
        CliAction::Run {
            debug_enabled,
            config_dir,
            date,
            overrides,
        } => match run(debug_enabled, config_dir, date, &overrides) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                log_error_exit!("{e:#}");
                EXIT_FAILURE
            }
        },
    };

    std::process::exit(code);
}

fn run(
    debug_enabled: bool,
    config_dir: Option<String>,
    date: Option<NaiveDate>,
    overrides: &Overrides,
) -> Result<()> {
    log_version!();

    if debug_enabled {
        log_pipe!();
        log_debug!("Debug mode enabled - showing every solver step");
    }

    config::set_config_dir(config_dir)?;

    let mut config = config::load()?;
    if debug_enabled {
        log_decorated!("Configuration file: {}", config::get_config_path()?.display());
    }
    config.apply_overrides(overrides);

    let ResolvedConfig {
        calculator,
        zeniths,
        timezone_detected,
    } = config.resolve()?;

    if timezone_detected {
        log_pipe!();
        log_info!(
            "Detected time zone {} from coordinates",
            calculator.time_zone().name()
        );
    }

    let date = date.unwrap_or_else(|| Utc::now().with_timezone(&calculator.time_zone()).date_naive());

    display::log_event_table(&calculator, &zeniths, date);

    if debug_enabled {
        for zenith in &zeniths {
            log_block_start!("{} zenith ({}°)", zenith, zenith.degrees());
            for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
                display::log_solver_trace(&calculator.calculator().trace(*zenith, date, event));
            }
        }
        log_pipe!();
        log_indented!("Times are local to {}", calculator.time_zone().name());
    }

    log_end!();
    Ok(())
}
