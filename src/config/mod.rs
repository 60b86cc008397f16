//! Configuration for the `sunclock` command.
//!
//! The configuration file is `sunclock.toml`, looked up in
//! `XDG_CONFIG_HOME/sunclock/` (or the platform equivalent) unless a directory
//! was set with `--config`:
//!
//! ```toml
//! latitude = 39.742043              # Geographic latitude (-90 to 90)
//! longitude = -104.991531           # Geographic longitude (-180 to 180)
//! timezone = "America/Denver"       # IANA zone; detected from coordinates when absent
//! zeniths = ["civil", "official"]   # Events to show; all four when absent
//! ```
//!
//! Every field is optional in the file because command-line flags can supply
//! or override them. Resolution into a calculator fails only when no
//! coordinates are available from either source.

pub mod loading;
pub mod validation;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::solar::{
    Coordinate, SunriseSunsetCalculator, Zenith, determine_timezone_from_coordinates,
    parse_time_zone,
};

pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};
pub use validation::validate_config;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub zeniths: Option<Vec<Zenith>>,
}

/// Values given on the command line, applied over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

/// A configuration turned into something that can compute events.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub calculator: SunriseSunsetCalculator,
    pub zeniths: Vec<Zenith>,
    /// True when the zone was looked up from the coordinates.
    pub timezone_detected: bool,
}

impl Config {
    /// Apply command-line values over the file values.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(latitude) = overrides.latitude {
            self.latitude = Some(latitude);
        }
        if let Some(longitude) = overrides.longitude {
            self.longitude = Some(longitude);
        }
        if let Some(timezone) = &overrides.timezone {
            self.timezone = Some(timezone.clone());
        }
    }

    /// Zeniths to report, defaulting to all four.
    pub fn zeniths(&self) -> Vec<Zenith> {
        self.zeniths.clone().unwrap_or_else(|| Zenith::ALL.to_vec())
    }

    /// Build the calculator, detecting the zone from the coordinates if needed.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        validate_config(self)?;

        let (latitude, longitude) = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => anyhow::bail!(
                "No location configured. Add latitude and longitude to sunclock.toml \
                or pass --lat and --lon"
            ),
        };

        let location = Coordinate::from_degrees(latitude, longitude)
            .with_context(|| format!("Invalid location {latitude}, {longitude}"))?;

        let (time_zone, timezone_detected): (Tz, bool) = match self.timezone.as_deref() {
            Some(name) => (parse_time_zone(name)?, false),
            None => (determine_timezone_from_coordinates(&location), true),
        };

        Ok(ResolvedConfig {
            calculator: SunriseSunsetCalculator::new(location, time_zone),
            zeniths: self.zeniths(),
            timezone_detected,
        })
    }
}
