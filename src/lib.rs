//! # Sunclock Library
//!
//! Sunrise, sunset and twilight times for any location and date, plus the
//! configuration and argument handling behind the `sunclock` binary.
//!
//! ## Architecture
//!
//! - **Calculation**: `solar` module with the stepwise solver, the zenith
//!   definitions and the [`SunriseSunsetCalculator`] facade
//! - **Configuration**: `config` module for the TOML location file and
//!   command-line overrides
//! - **Command line**: `args` module for parsing and help/version display
//! - **Infrastructure**: `common` for logging macros and constants, `error`
//!   for the library error type

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod common;

pub mod args;
pub mod config;
pub mod error;
pub mod solar;

pub use error::SolarError;
pub use solar::{Coordinate, SolarEvent, SolarEventCalculator, SunriseSunsetCalculator, Zenith};
