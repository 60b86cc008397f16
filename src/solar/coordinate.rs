//! Geographic coordinate in decimal degrees.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::fmt;
use std::str::FromStr;

use crate::common::constants::{
    MAXIMUM_LATITUDE, MAXIMUM_LONGITUDE, MINIMUM_LATITUDE, MINIMUM_LONGITUDE,
};
use crate::error::SolarError;

/// A validated latitude/longitude pair.
///
/// Both fields are checked on every construction and replacement, so a
/// `Coordinate` always satisfies `-90 ≤ latitude ≤ 90` and
/// `-180 ≤ longitude ≤ 180`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    latitude: Decimal,
    longitude: Decimal,
}

impl Coordinate {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Result<Self, SolarError> {
        Ok(Self {
            latitude: check_range("latitude", latitude, MINIMUM_LATITUDE, MAXIMUM_LATITUDE)?,
            longitude: check_range("longitude", longitude, MINIMUM_LONGITUDE, MAXIMUM_LONGITUDE)?,
        })
    }

    /// Parse both values from decimal strings such as `"39.742043"`.
    pub fn from_strs(latitude: &str, longitude: &str) -> Result<Self, SolarError> {
        Self::new(
            parse_decimal("latitude", latitude)?,
            parse_decimal("longitude", longitude)?,
        )
    }

    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, SolarError> {
        Self::new(
            decimal_from_f64("latitude", latitude)?,
            decimal_from_f64("longitude", longitude)?,
        )
    }

    pub fn latitude(&self) -> Decimal {
        self.latitude
    }

    pub fn longitude(&self) -> Decimal {
        self.longitude
    }

    /// Replace both fields. On error the coordinate is left untouched.
    pub fn set_location(&mut self, latitude: Decimal, longitude: Decimal) -> Result<(), SolarError> {
        *self = Self::new(latitude, longitude)?;
        Ok(())
    }

    pub fn set_location_strs(&mut self, latitude: &str, longitude: &str) -> Result<(), SolarError> {
        *self = Self::from_strs(latitude, longitude)?;
        Ok(())
    }

    pub fn set_location_degrees(&mut self, latitude: f64, longitude: f64) -> Result<(), SolarError> {
        *self = Self::from_degrees(latitude, longitude)?;
        Ok(())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}°", self.latitude, self.longitude)
    }
}

/// Parses `"latitude,longitude"`.
impl FromStr for Coordinate {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((latitude, longitude)) => Self::from_strs(latitude, longitude),
            None => Err(SolarError::MalformedCoordinate {
                field: "coordinate",
                input: s.to_string(),
            }),
        }
    }
}

fn parse_decimal(field: &'static str, input: &str) -> Result<Decimal, SolarError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| SolarError::MalformedCoordinate {
            field,
            input: input.to_string(),
        })
}

fn decimal_from_f64(field: &'static str, value: f64) -> Result<Decimal, SolarError> {
    if !value.is_finite() {
        return Err(SolarError::MalformedCoordinate {
            field,
            input: value.to_string(),
        });
    }
    Decimal::from_f64(value).ok_or_else(|| SolarError::MalformedCoordinate {
        field,
        input: value.to_string(),
    })
}

fn check_range(
    field: &'static str,
    value: Decimal,
    min: i32,
    max: i32,
) -> Result<Decimal, SolarError> {
    if value < Decimal::from(min) || value > Decimal::from(max) {
        return Err(SolarError::CoordinateOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
