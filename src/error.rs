//! Error type for the calculator library.
//!
//! Polar day and polar night are not errors; they are reported through the
//! no-event sentinel and `None` results.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolarError {
    /// A latitude or longitude that is not a decimal number.
    #[error("invalid coordinate: {field} '{input}' is not a decimal number")]
    MalformedCoordinate { field: &'static str, input: String },

    /// A latitude or longitude outside its geographic range.
    #[error("invalid coordinate: {field} {value} must be between {min} and {max} degrees")]
    CoordinateOutOfRange {
        field: &'static str,
        value: Decimal,
        min: i32,
        max: i32,
    },

    /// A sun elevation that is not a finite number of degrees.
    #[error("invalid elevation: '{input}' is not a finite number of degrees")]
    MalformedElevation { input: String },

    /// A zone name the IANA database does not know.
    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),
}

impl SolarError {
    /// True for both malformed and out-of-range coordinates.
    pub fn is_invalid_coordinate(&self) -> bool {
        matches!(
            self,
            SolarError::MalformedCoordinate { .. } | SolarError::CoordinateOutOfRange { .. }
        )
    }
}
