//! Application-wide constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// # Zenith thresholds (degrees from the vertical)

pub const ASTRONOMICAL_ZENITH: Decimal = dec!(108.0);
pub const NAUTICAL_ZENITH: Decimal = dec!(102.0);
pub const CIVIL_ZENITH: Decimal = dec!(96.0);
/// Geometric horizon plus refraction and the solar radius.
pub const OFFICIAL_ZENITH: Decimal = dec!(90.8333);

// # Solver output

/// Returned by the string API when the sun never crosses the requested zenith.
pub const NO_EVENT: &str = "99:99";

/// Fractional digits kept by every intermediate solver value.
pub const SOLVER_SCALE: u32 = 4;

// # Coordinate bounds

pub const MINIMUM_LATITUDE: i32 = -90;
pub const MAXIMUM_LATITUDE: i32 = 90;
pub const MINIMUM_LONGITUDE: i32 = -180;
pub const MAXIMUM_LONGITUDE: i32 = 180;

// # Configuration

pub const CONFIG_DIR_NAME: &str = "sunclock";
pub const CONFIG_FILE_NAME: &str = "sunclock.toml";

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
