//! Configuration validation.
//!
//! Rejects values the calculator would refuse anyway, with messages that name
//! the offending field.

use anyhow::Result;

use super::Config;
use crate::common::constants::*;
use crate::solar::parse_time_zone;

pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude
        && !(f64::from(MINIMUM_LATITUDE)..=f64::from(MAXIMUM_LATITUDE)).contains(&lat)
    {
        anyhow::bail!(
            "latitude must be between {} and {} degrees (got {})",
            MINIMUM_LATITUDE,
            MAXIMUM_LATITUDE,
            lat
        );
    }

    if let Some(lon) = config.longitude
        && !(f64::from(MINIMUM_LONGITUDE)..=f64::from(MAXIMUM_LONGITUDE)).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between {} and {} degrees (got {})",
            MINIMUM_LONGITUDE,
            MAXIMUM_LONGITUDE,
            lon
        );
    }

    // A coordinate needs both halves
    if config.latitude.is_some() != config.longitude.is_some() {
        anyhow::bail!("latitude and longitude must be given together");
    }

    if let Some(name) = config.timezone.as_deref() {
        parse_time_zone(name)?;
    }

    if let Some(zeniths) = &config.zeniths
        && zeniths.is_empty()
    {
        anyhow::bail!("zeniths must list at least one of: astronomical, nautical, civil, official");
    }

    Ok(())
}
