//! Local clock time of a solved event.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;

use super::numeric;

/// Local civil time of an event as decimal hours.
///
/// `hours` is always in `[0, 24)`. `day_offset` is `-1` when the zone-adjusted
/// time was negative, meaning the event falls on the previous calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalEventTime {
    hours: Decimal,
    day_offset: i64,
}

impl LocalEventTime {
    /// Normalize a raw zone-adjusted time into `[0, 24)`.
    pub(crate) fn from_raw_hours(raw: Decimal) -> Self {
        let day = Decimal::from(24);
        let mut hours = raw;
        let mut day_offset = 0;
        if hours < Decimal::ZERO {
            day_offset = -1;
            while hours < Decimal::ZERO {
                hours += day;
            }
        }
        while hours >= day {
            hours -= day;
        }
        Self { hours, day_offset }
    }

    pub fn hours(&self) -> Decimal {
        self.hours
    }

    pub fn day_offset(&self) -> i64 {
        self.day_offset
    }

    /// Clock hour and minute, minutes rounded half-to-even.
    ///
    /// A minute count that rounds up to 60 carries into the hour, and hour 24
    /// wraps to 0.
    pub fn hour_minute(&self) -> (u32, u32) {
        let whole = self.hours.trunc();
        let mut hour = whole.to_u32().unwrap_or(0);
        let mut minute = numeric::round_whole((self.hours - whole) * Decimal::from(60))
            .to_u32()
            .unwrap_or(0);
        if minute == 60 {
            minute = 0;
            hour += 1;
        }
        if hour == 24 {
            hour = 0;
        }
        (hour, minute)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        let (hour, minute) = self.hour_minute();
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Zero-padded `HH:MM`.
impl fmt::Display for LocalEventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute) = self.hour_minute();
        write!(f, "{hour:02}:{minute:02}")
    }
}
