//! Solar event solver.
//!
//! Implements the almanac sunrise/sunset procedure: estimate the event's time
//! of year from the longitude, derive the sun's mean anomaly, true longitude,
//! right ascension and declination, then solve for the local hour angle at
//! which the sun reaches the requested zenith.
//!
//! Every intermediate value is rounded to four fractional digits
//! (half-to-even) so results reproduce the published tables to the minute.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::numeric::{self, divide, multiply, round};
use super::time::LocalEventTime;
use super::timezone::ZoneRules;
use super::{Coordinate, SolarEvent, Zenith};
use crate::common::constants::NO_EVENT;

/// Every intermediate value of one solver run.
///
/// Fields after `cos_local_hour` are `None` when the sun never reaches the
/// zenith on that date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverTrace {
    pub zenith_degrees: Decimal,
    pub event: SolarEvent,
    pub day_of_year: u32,
    pub base_longitude_hour: Decimal,
    pub longitude_hour: Decimal,
    pub mean_anomaly: Decimal,
    pub true_longitude: Decimal,
    pub right_ascension: Decimal,
    pub sin_declination: Decimal,
    pub cos_declination: Decimal,
    pub cos_local_hour: Option<Decimal>,
    pub local_hour: Option<Decimal>,
    pub local_mean_time: Option<Decimal>,
    pub utc_time: Option<Decimal>,
    pub zone_rules: ZoneRules,
    pub local_time: Option<LocalEventTime>,
}

/// Solve one event. `None` means the sun does not cross the zenith that day.
pub fn solve(
    coordinate: &Coordinate,
    zenith: Zenith,
    date: NaiveDate,
    event: SolarEvent,
    time_zone: Tz,
) -> Option<LocalEventTime> {
    trace_solution(coordinate, zenith.degrees(), date, event, time_zone).local_time
}

/// Run the solver for an arbitrary zenith angle, keeping every step.
pub(crate) fn trace_solution(
    coordinate: &Coordinate,
    zenith_degrees: Decimal,
    date: NaiveDate,
    event: SolarEvent,
    time_zone: Tz,
) -> SolverTrace {
    let day_of_year = date.ordinal();
    let base_longitude_hour = base_longitude_hour(coordinate);
    let longitude_hour = longitude_hour(day_of_year, base_longitude_hour, event);
    let mean_anomaly = mean_anomaly(longitude_hour);
    let true_longitude = sun_true_longitude(mean_anomaly);
    let right_ascension = right_ascension(true_longitude);
    let sin_declination = sin_of_sun_declination(true_longitude);
    let cos_declination = cos_of_sun_declination(sin_declination);
    let zone_rules = ZoneRules::for_date(&time_zone, date);

    let mut trace = SolverTrace {
        zenith_degrees,
        event,
        day_of_year,
        base_longitude_hour,
        longitude_hour,
        mean_anomaly,
        true_longitude,
        right_ascension,
        sin_declination,
        cos_declination,
        cos_local_hour: None,
        local_hour: None,
        local_mean_time: None,
        utc_time: None,
        zone_rules,
        local_time: None,
    };

    let cos_local_hour = cosine_sun_local_hour(
        coordinate,
        zenith_degrees,
        sin_declination,
        cos_declination,
    );
    trace.cos_local_hour = cos_local_hour;
    let Some(cos_local_hour) = cos_local_hour else {
        return trace;
    };
    if cos_local_hour < dec!(-1) || cos_local_hour > Decimal::ONE {
        return trace;
    }

    let local_hour = sun_local_hour(cos_local_hour, event);
    let local_mean_time = local_mean_time(local_hour, right_ascension, longitude_hour);
    let utc_time = local_mean_time - base_longitude_hour;

    trace.local_hour = Some(local_hour);
    trace.local_mean_time = Some(local_mean_time);
    trace.utc_time = Some(utc_time);
    trace.local_time = Some(LocalEventTime::from_raw_hours(
        utc_time + zone_rules.total_offset_hours(),
    ));
    trace
}

fn base_longitude_hour(coordinate: &Coordinate) -> Decimal {
    divide(coordinate.longitude(), dec!(15)).unwrap_or(Decimal::ZERO)
}

/// Day of year plus the fraction of a day at which the event is first guessed.
fn longitude_hour(day_of_year: u32, base_longitude_hour: Decimal, event: SolarEvent) -> Decimal {
    let fraction = divide(event.seed_hour() - base_longitude_hour, dec!(24)).unwrap_or(Decimal::ZERO);
    round(Decimal::from(day_of_year) + fraction)
}

fn mean_anomaly(longitude_hour: Decimal) -> Decimal {
    round(multiply(dec!(0.9856), longitude_hour) - dec!(3.289))
}

fn sun_true_longitude(mean_anomaly: Decimal) -> Decimal {
    let anomaly_radians = numeric::to_radians(mean_anomaly);
    let sin_anomaly = numeric::sin(anomaly_radians);
    let sin_double_anomaly = numeric::sin(multiply(anomaly_radians, dec!(2)));

    let mut true_longitude = mean_anomaly
        + multiply(sin_anomaly, dec!(1.916))
        + multiply(sin_double_anomaly, dec!(0.020))
        + dec!(282.634);
    if true_longitude >= dec!(360) {
        true_longitude -= dec!(360);
    }
    round(true_longitude)
}

/// Right ascension in hours.
fn right_ascension(true_longitude: Decimal) -> Decimal {
    let tan_longitude = numeric::tan(numeric::to_radians(true_longitude));
    let scaled = multiply(numeric::to_degrees(tan_longitude), dec!(0.91764));
    let mut ascension = round(numeric::to_degrees(numeric::atan(numeric::to_radians(scaled))));

    if ascension < Decimal::ZERO {
        ascension += dec!(360);
    } else if ascension >= dec!(360) {
        ascension -= dec!(360);
    }

    divide(right_ascension_in_quadrant(true_longitude, ascension), dec!(15)).unwrap_or(Decimal::ZERO)
}

/// Move a right ascension into the same 90° quadrant as the true longitude.
///
/// `atan` only returns angles in (-90°, 90°), so after normalizing into
/// `[0, 360)` the ascension can sit in the wrong quadrant. Both angles are in
/// degrees; the result is in degrees.
pub fn right_ascension_in_quadrant(true_longitude: Decimal, ascension: Decimal) -> Decimal {
    let ninety = dec!(90);
    let longitude_quadrant = (true_longitude / ninety).floor() * ninety;
    let ascension_quadrant = (ascension / ninety).floor() * ninety;
    ascension + (longitude_quadrant - ascension_quadrant)
}

fn sin_of_sun_declination(true_longitude: Decimal) -> Decimal {
    round(numeric::sin(numeric::to_radians(true_longitude)) * dec!(0.39782))
}

fn cos_of_sun_declination(sin_declination: Decimal) -> Decimal {
    round(numeric::cos(numeric::asin(sin_declination)))
}

/// `None` when the divisor vanishes, which only happens at the poles.
fn cosine_sun_local_hour(
    coordinate: &Coordinate,
    zenith_degrees: Decimal,
    sin_declination: Decimal,
    cos_declination: Decimal,
) -> Option<Decimal> {
    let latitude_radians = numeric::to_radians(coordinate.latitude());
    let cos_zenith = numeric::cos(numeric::to_radians(zenith_degrees));
    let sin_latitude = numeric::sin(latitude_radians);
    let cos_latitude = numeric::cos(latitude_radians);

    let dividend = cos_zenith - sin_declination * sin_latitude;
    let divisor = cos_declination * cos_latitude;
    divide(dividend, divisor)
}

/// Local hour angle in hours.
fn sun_local_hour(cos_local_hour: Decimal, event: SolarEvent) -> Decimal {
    let mut local_hour = numeric::to_degrees(numeric::acos(cos_local_hour));
    if event == SolarEvent::Sunrise {
        local_hour = dec!(360) - local_hour;
    }
    divide(local_hour, dec!(15)).unwrap_or(Decimal::ZERO)
}

fn local_mean_time(local_hour: Decimal, right_ascension: Decimal, longitude_hour: Decimal) -> Decimal {
    let mut mean_time =
        local_hour + right_ascension - longitude_hour * dec!(0.06571) - dec!(6.622);
    if mean_time < Decimal::ZERO {
        mean_time += dec!(24);
    } else if mean_time >= dec!(24) {
        mean_time -= dec!(24);
    }
    round(mean_time)
}

/// Computes solar events for one location in one time zone.
///
/// The calculator is immutable and shareable across threads; each call is a
/// pure function of its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarEventCalculator {
    location: Coordinate,
    time_zone: Tz,
}

impl SolarEventCalculator {
    pub fn new(location: Coordinate, time_zone: Tz) -> Self {
        Self {
            location,
            time_zone,
        }
    }

    pub fn location(&self) -> &Coordinate {
        &self.location
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Sunrise as `HH:MM`, or `"99:99"` when there is none.
    pub fn compute_sunrise_time(&self, zenith: Zenith, date: NaiveDate) -> String {
        format_event(self.compute_event(zenith, date, SolarEvent::Sunrise))
    }

    /// Sunset as `HH:MM`, or `"99:99"` when there is none.
    pub fn compute_sunset_time(&self, zenith: Zenith, date: NaiveDate) -> String {
        format_event(self.compute_event(zenith, date, SolarEvent::Sunset))
    }

    /// Sunrise on the date of `date` (read in this calculator's zone).
    pub fn compute_sunrise_calendar<Z: TimeZone>(
        &self,
        zenith: Zenith,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.event_calendar(zenith.degrees(), date, SolarEvent::Sunrise)
    }

    /// Sunset on the date of `date` (read in this calculator's zone).
    pub fn compute_sunset_calendar<Z: TimeZone>(
        &self,
        zenith: Zenith,
        date: &DateTime<Z>,
    ) -> Option<DateTime<FixedOffset>> {
        self.event_calendar(zenith.degrees(), date, SolarEvent::Sunset)
    }

    pub fn compute_event(
        &self,
        zenith: Zenith,
        date: NaiveDate,
        event: SolarEvent,
    ) -> Option<LocalEventTime> {
        solve(&self.location, zenith, date, event, self.time_zone)
    }

    pub fn trace(&self, zenith: Zenith, date: NaiveDate, event: SolarEvent) -> SolverTrace {
        trace_solution(&self.location, zenith.degrees(), date, event, self.time_zone)
    }

    /// Build a fresh date-time for the event.
    ///
    /// The caller's value is only read: it is converted into this zone to
    /// pick the calendar date, and the result is a new value with seconds and
    /// sub-seconds zeroed. The result carries the offset the solver applied,
    /// so its clock time always matches the `HH:MM` string, even inside a
    /// daylight saving gap or fold.
    pub(crate) fn event_calendar<Z: TimeZone>(
        &self,
        zenith_degrees: Decimal,
        date: &DateTime<Z>,
        event: SolarEvent,
    ) -> Option<DateTime<FixedOffset>> {
        let local_date = date.with_timezone(&self.time_zone).date_naive();
        let trace = trace_solution(&self.location, zenith_degrees, local_date, event, self.time_zone);
        let time = trace.local_time?;
        let offset = trace.zone_rules.fixed_offset()?;

        let day = local_date + Duration::days(time.day_offset());
        let (hour, minute) = time.hour_minute();
        let naive = day.and_hms_opt(hour, minute, 0)?;
        offset.from_local_datetime(&naive).single()
    }
}

fn format_event(time: Option<LocalEventTime>) -> String {
    match time {
        Some(time) => time.to_string(),
        None => NO_EVENT.to_string(),
    }
}
