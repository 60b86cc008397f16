//! Named accessors for every zenith and event combination.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use super::calculator::SolarEventCalculator;
use super::timezone::{determine_timezone_from_coordinates, parse_time_zone};
use super::{Coordinate, SolarEvent, Zenith};
use crate::error::SolarError;

/// Sunrise and sunset for one zenith on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZenithEvents {
    pub zenith: Zenith,
    pub sunrise: String,
    pub sunset: String,
}

/// Sunrise, sunset and twilight times for a fixed location and zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunriseSunsetCalculator {
    calculator: SolarEventCalculator,
}

impl SunriseSunsetCalculator {
    pub fn new(location: Coordinate, time_zone: Tz) -> Self {
        Self {
            calculator: SolarEventCalculator::new(location, time_zone),
        }
    }

    /// Build from an IANA zone name, failing on names the database lacks.
    pub fn with_time_zone_name(location: Coordinate, time_zone: &str) -> Result<Self, SolarError> {
        Ok(Self::new(location, parse_time_zone(time_zone)?))
    }

    /// Build with the zone that contains the location.
    pub fn for_location(location: Coordinate) -> Self {
        let time_zone = determine_timezone_from_coordinates(&location);
        Self::new(location, time_zone)
    }

    pub fn location(&self) -> &Coordinate {
        self.calculator.location()
    }

    pub fn time_zone(&self) -> Tz {
        self.calculator.time_zone()
    }

    pub fn calculator(&self) -> &SolarEventCalculator {
        &self.calculator
    }

    pub fn astronomical_sunrise_for_date(&self, date: NaiveDate) -> String {
        self.calculator.compute_sunrise_time(Zenith::Astronomical, date)
    }

    pub fn astronomical_sunrise_calendar_for_date<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.calculator.compute_sunrise_calendar(Zenith::Astronomical, date)
    }

    pub fn astronomical_sunset_for_date(&self, date: NaiveDate) -> String {
        self.calculator.compute_sunset_time(Zenith::Astronomical, date)
    }

    pub fn astronomical_sunset_calendar_for_date<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.calculator.compute_sunset_calendar(Zenith::Astronomical, date)
    }

    pub fn nautical_sunrise_for_date(&self, date: NaiveDate) -> String {
        self.calculator.compute_sunrise_time(Zenith::Nautical, date)
    }

    pub fn nautical_sunrise_calendar_for_date<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.calculator.compute_sunrise_calendar(Zenith::Nautical, date)
    }

    pub fn nautical_sunset_for_date(&self, date: NaiveDate) -> String {
        self.calculator.compute_sunset_time(Zenith::Nautical, date)
    }

    pub fn nautical_sunset_calendar_for_date<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.calculator.compute_sunset_calendar(Zenith::Nautical, date)
    }

    pub fn civil_sunrise_for_date(&self, date: NaiveDate) -> String {
        self.calculator.compute_sunrise_time(Zenith::Civil, date)
    }

    pub fn civil_sunrise_calendar_for_date<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.calculator.compute_sunrise_calendar(Zenith::Civil, date)
    }

    pub fn civil_sunset_for_date(&self, date: NaiveDate) -> String {
        self.calculator.compute_sunset_time(Zenith::Civil, date)
    }

    pub fn civil_sunset_calendar_for_date<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.calculator.compute_sunset_calendar(Zenith::Civil, date)
    }

    pub fn official_sunrise_for_date(&self, date: NaiveDate) -> String {
        self.calculator.compute_sunrise_time(Zenith::Official, date)
    }

    pub fn official_sunrise_calendar_for_date<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.calculator.compute_sunrise_calendar(Zenith::Official, date)
    }

    pub fn official_sunset_for_date(&self, date: NaiveDate) -> String {
        self.calculator.compute_sunset_time(Zenith::Official, date)
    }

    pub fn official_sunset_calendar_for_date<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.calculator.compute_sunset_calendar(Zenith::Official, date)
    }

    /// Any zenith and event by value, as `HH:MM` or the no-event sentinel.
    pub fn event_for_date(&self, zenith: Zenith, event: SolarEvent, date: NaiveDate) -> String {
        match event {
            SolarEvent::Sunrise => self.calculator.compute_sunrise_time(zenith, date),
            SolarEvent::Sunset => self.calculator.compute_sunset_time(zenith, date),
        }
    }

    /// Sunrise and sunset for each zenith in `zeniths`, in the given order.
    pub fn events_for_date(&self, zeniths: &[Zenith], date: NaiveDate) -> Vec<ZenithEvents> {
        zeniths
            .iter()
            .map(|&zenith| ZenithEvents {
                zenith,
                sunrise: self.calculator.compute_sunrise_time(zenith, date),
                sunset: self.calculator.compute_sunset_time(zenith, date),
            })
            .collect()
    }

    /// One-off sunrise without keeping a calculator around.
    ///
    /// `degrees` is the sun's elevation at the event, negative below the
    /// horizon: `-6.0` gives civil dawn (zenith 96°).
    pub fn sunrise<Z: TimeZone>(
        latitude: f64,
        longitude: f64,
        time_zone: Tz,
        date: &DateTime<Z>,
        degrees: f64,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        Self::one_off(latitude, longitude, time_zone, date, degrees, SolarEvent::Sunrise)
    }

    /// One-off sunset; see [`SunriseSunsetCalculator::sunrise`].
    pub fn sunset<Z: TimeZone>(
        latitude: f64,
        longitude: f64,
        time_zone: Tz,
        date: &DateTime<Z>,
        degrees: f64,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        Self::one_off(latitude, longitude, time_zone, date, degrees, SolarEvent::Sunset)
    }

    fn one_off<Z: TimeZone>(
        latitude: f64,
        longitude: f64,
        time_zone: Tz,
        date: &DateTime<Z>,
        degrees: f64,
        event: SolarEvent,
    ) -> Result<Option<DateTime<FixedOffset>>, SolarError> {
        let location = Coordinate::from_degrees(latitude, longitude)?;
        let zenith_degrees = Decimal::from(90) - elevation_from_f64(degrees)?;
        Ok(SolarEventCalculator::new(location, time_zone).event_calendar(zenith_degrees, date, event))
    }
}

fn elevation_from_f64(degrees: f64) -> Result<Decimal, SolarError> {
    let elevation = if degrees.is_finite() { Decimal::from_f64(degrees) } else { None };
    elevation.ok_or_else(|| SolarError::MalformedElevation {
        input: degrees.to_string(),
    })
}
