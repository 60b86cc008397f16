//! Fixed-precision decimal helpers for the solver.
//!
//! Every value the solver keeps is rounded to [`SOLVER_SCALE`] fractional digits
//! with banker's rounding (half-to-even). Trigonometry runs in `f64` and is
//! converted back before rounding, so the rounding rule lives in exactly one
//! place: [`round`].

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::f64::consts::PI;

use crate::common::constants::SOLVER_SCALE;

/// Round to the solver scale, half-to-even.
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SOLVER_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Round to a whole number, half-to-even.
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

pub fn multiply(multiplicand: Decimal, multiplier: Decimal) -> Decimal {
    round(multiplicand * multiplier)
}

/// Divide and round; `None` for a zero divisor.
pub fn divide(dividend: Decimal, divisor: Decimal) -> Option<Decimal> {
    dividend.checked_div(divisor).map(round)
}

pub fn to_radians(degrees: Decimal) -> Decimal {
    multiply(degrees, from_f64(PI / 180.0))
}

pub fn to_degrees(radians: Decimal) -> Decimal {
    multiply(radians, from_f64(180.0 / PI))
}

pub fn sin(radians: Decimal) -> Decimal {
    from_f64(to_f64(radians).sin())
}

pub fn cos(radians: Decimal) -> Decimal {
    from_f64(to_f64(radians).cos())
}

pub fn tan(radians: Decimal) -> Decimal {
    from_f64(to_f64(radians).tan())
}

pub fn atan(value: Decimal) -> Decimal {
    from_f64(to_f64(value).atan())
}

pub fn asin(value: Decimal) -> Decimal {
    from_f64(to_f64(value).clamp(-1.0, 1.0).asin())
}

/// Arccosine with the argument clamped into `[-1, 1]`, rounded to the solver scale.
pub fn acos(value: Decimal) -> Decimal {
    round(from_f64(to_f64(value).clamp(-1.0, 1.0).acos()))
}

pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

// Non-finite inputs only come from outside the clamped domains above.
pub fn from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}
