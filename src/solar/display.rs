//! Display helpers for solver results.
//!
//! Used by the binary to print the event table and, in debug mode, every
//! intermediate value of a solver run.

use chrono::NaiveDate;

use super::calculator::SolverTrace;
use super::sunrise_sunset::ZenithEvents;
use super::{SunriseSunsetCalculator, Zenith};
use crate::common::constants::NO_EVENT;

/// Log the sunrise/sunset table for the selected zeniths.
pub fn log_event_table(calculator: &SunriseSunsetCalculator, zeniths: &[Zenith], date: NaiveDate) {
    log_block_start!(
        "Solar events for {} at {} ({})",
        date.format("%Y-%m-%d"),
        calculator.location(),
        calculator.time_zone().name()
    );
    for row in calculator.events_for_date(zeniths, date) {
        log_indented!("{}", format_row(&row));
    }
}

/// One table line, e.g. `civil         sunrise 06:06   sunset 18:19`.
pub fn format_row(row: &ZenithEvents) -> String {
    format!(
        "{:<13} sunrise {}   sunset {}",
        row.zenith.name(),
        describe(&row.sunrise),
        describe(&row.sunset)
    )
}

fn describe(time: &str) -> &str {
    if time == NO_EVENT { "none " } else { time }
}

/// Log every step of one solver run.
pub fn log_solver_trace(trace: &SolverTrace) {
    log_pipe!();
    log_debug!("Solver steps for {} at zenith {}°:", trace.event, trace.zenith_degrees);
    log_indented!("            Day of year: {}", trace.day_of_year);
    log_indented!("    Base longitude hour: {}", trace.base_longitude_hour);
    log_indented!("         Longitude hour: {}", trace.longitude_hour);
    log_indented!("           Mean anomaly: {}°", trace.mean_anomaly);
    log_indented!("      Sun true longitude: {}°", trace.true_longitude);
    log_indented!("        Right ascension: {}h", trace.right_ascension);
    log_indented!("   Sine of declination: {}", trace.sin_declination);
    log_indented!(" Cosine of declination: {}", trace.cos_declination);

    match trace.cos_local_hour {
        Some(cos_local_hour) => log_indented!("  Cosine of hour angle: {}", cos_local_hour),
        None => log_indented!("  Cosine of hour angle: undefined at the pole"),
    }

    let (Some(local_hour), Some(mean_time), Some(utc_time), Some(local_time)) = (
        trace.local_hour,
        trace.local_mean_time,
        trace.utc_time,
        trace.local_time,
    ) else {
        log_indented!("The sun does not reach this zenith on this date");
        return;
    };

    log_indented!("       Local hour angle: {}h", local_hour);
    log_indented!("        Local mean time: {}h", mean_time);
    log_indented!("               UTC time: {}h", utc_time);
    log_indented!(
        "      Zone offset (std): {}h{}",
        trace.zone_rules.standard_offset_hours,
        if trace.zone_rules.daylight_saving { " + 1h daylight saving" } else { "" }
    );
    log_indented!(
        "             Local time: {}h = {}{}",
        local_time.hours(),
        local_time,
        if local_time.day_offset() < 0 { " (previous day)" } else { "" }
    );
}
