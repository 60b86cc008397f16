//! Sunrise, sunset and twilight calculation.
//!
//! ## Module Structure
//!
//! - [`coordinate`]: validated latitude/longitude in decimal degrees
//! - [`zenith`]: the four named zenith thresholds and the sunrise/sunset selector
//! - [`numeric`]: fixed-precision decimal helpers with half-to-even rounding
//! - [`calculator`]: the stepwise solver and [`SolarEventCalculator`]
//! - [`sunrise_sunset`]: [`SunriseSunsetCalculator`], one accessor per zenith and event
//! - [`time`]: the solved local time and its `HH:MM` rendering
//! - [`timezone`]: zone parsing, detection from coordinates, per-date offset rules
//! - [`display`]: tables and solver traces for the command line
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sunclock::solar::{Coordinate, SunriseSunsetCalculator};
//!
//! let denver = Coordinate::from_strs("39.742043", "-104.991531").unwrap();
//! let calculator = SunriseSunsetCalculator::with_time_zone_name(denver, "America/Denver").unwrap();
//! let date = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
//!
//! assert_eq!(calculator.official_sunrise_for_date(date), "06:33");
//! assert_eq!(calculator.official_sunset_for_date(date), "17:52");
//! ```
//!
//! When the sun never reaches the requested zenith (polar day or night) the
//! string accessors return `"99:99"` and the date-time accessors return `None`.

pub mod calculator;
pub mod coordinate;
pub mod display;
pub mod numeric;
pub mod sunrise_sunset;
pub mod time;
pub mod timezone;
pub mod zenith;

pub use calculator::{SolarEventCalculator, SolverTrace, right_ascension_in_quadrant, solve};
pub use coordinate::Coordinate;
pub use sunrise_sunset::{SunriseSunsetCalculator, ZenithEvents};
pub use time::LocalEventTime;
pub use timezone::{ZoneRules, determine_timezone_from_coordinates, parse_time_zone};
pub use zenith::{SolarEvent, Zenith};

#[cfg(test)]
mod tests;
