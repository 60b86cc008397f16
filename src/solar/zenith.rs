//! Named solar zenith thresholds.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::common::constants::{ASTRONOMICAL_ZENITH, CIVIL_ZENITH, NAUTICAL_ZENITH, OFFICIAL_ZENITH};

/// The angle between the vertical and the sun's centre that defines an event.
///
/// Larger angles mean the sun is further below the horizon, so astronomical
/// dawn comes first and official sunrise last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zenith {
    /// 108°, the end of astronomical twilight.
    Astronomical,
    /// 102°, the end of nautical twilight.
    Nautical,
    /// 96°, the end of civil twilight.
    Civil,
    /// 90°50', the sun's upper limb on the horizon.
    Official,
}

impl Zenith {
    /// All zeniths, from the deepest twilight to the horizon.
    pub const ALL: [Zenith; 4] = [
        Zenith::Astronomical,
        Zenith::Nautical,
        Zenith::Civil,
        Zenith::Official,
    ];

    pub fn degrees(&self) -> Decimal {
        match self {
            Zenith::Astronomical => ASTRONOMICAL_ZENITH,
            Zenith::Nautical => NAUTICAL_ZENITH,
            Zenith::Civil => CIVIL_ZENITH,
            Zenith::Official => OFFICIAL_ZENITH,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Zenith::Astronomical => "astronomical",
            Zenith::Nautical => "nautical",
            Zenith::Civil => "civil",
            Zenith::Official => "official",
        }
    }
}

impl fmt::Display for Zenith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zenith {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zenith::ALL
            .into_iter()
            .find(|zenith| zenith.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown zenith '{}' (expected astronomical, nautical, civil or official)",
                    s
                )
            })
    }
}

/// Which crossing of the zenith threshold to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl SolarEvent {
    /// Hour of the day the longitude-hour estimate is seeded with.
    pub(crate) fn seed_hour(&self) -> Decimal {
        match self {
            SolarEvent::Sunrise => Decimal::from(6),
            SolarEvent::Sunset => Decimal::from(18),
        }
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolarEvent::Sunrise => f.write_str("sunrise"),
            SolarEvent::Sunset => f.write_str("sunset"),
        }
    }
}
