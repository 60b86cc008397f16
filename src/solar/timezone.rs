//! Time zone lookup and per-date offset rules.

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::{OffsetComponents, Tz};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::sync::OnceLock;
use tzf_rs::DefaultFinder;

use super::Coordinate;
use super::numeric;
use crate::error::SolarError;

/// Parse an IANA zone name such as `"America/Denver"`.
pub fn parse_time_zone(name: &str) -> Result<Tz, SolarError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| SolarError::UnknownTimeZone(name.to_string()))
}

/// Find the zone whose boundaries contain the coordinate.
///
/// Points the boundary data does not cover (open ocean, poles) fall back to UTC.
pub fn determine_timezone_from_coordinates(coordinate: &Coordinate) -> Tz {
    static FINDER: OnceLock<DefaultFinder> = OnceLock::new();
    let finder = FINDER.get_or_init(DefaultFinder::new);

    // tzf-rs takes (longitude, latitude)
    let tz_name = finder.get_tz_name(
        numeric::to_f64(coordinate.longitude()),
        numeric::to_f64(coordinate.latitude()),
    );
    tz_name.parse::<Tz>().unwrap_or(Tz::UTC)
}

/// Offset rules a zone applies on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRules {
    /// Standard offset from UTC in hours, without daylight saving.
    pub standard_offset_hours: Decimal,
    pub daylight_saving: bool,
}

impl ZoneRules {
    /// Rules in force at local noon of `date`, which is never inside a transition gap.
    pub fn for_date(tz: &Tz, date: NaiveDate) -> Self {
        let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
        let offset = tz
            .offset_from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| tz.offset_from_utc_datetime(&noon));

        let standard_seconds = offset.base_utc_offset().num_seconds();
        let standard_offset_hours = numeric::divide(Decimal::from(standard_seconds), Decimal::from(3600))
            .unwrap_or(Decimal::ZERO);

        Self {
            standard_offset_hours,
            daylight_saving: offset.dst_offset().num_seconds() != 0,
        }
    }

    /// Hours to add to UTC: the standard offset plus one hour under daylight saving.
    pub fn total_offset_hours(&self) -> Decimal {
        if self.daylight_saving {
            self.standard_offset_hours + Decimal::ONE
        } else {
            self.standard_offset_hours
        }
    }

    /// The total offset as a chrono offset, to the nearest second.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        let seconds = (self.total_offset_hours() * Decimal::from(3600)).round().to_i32()?;
        FixedOffset::east_opt(seconds)
    }
}
