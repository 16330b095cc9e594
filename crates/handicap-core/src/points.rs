//! Rating points per stroke.
//!
//! One stroke is worth more rating points the better the player is. The curve
//! is piecewise linear, calibrated so that a rating of 150 is worth about 4
//! points per stroke, 200 about 7 and 230 about 10. It keeps climbing to 15 at
//! a rating of 280 and stays flat beyond that.

use std::num::NonZeroU32;

use crate::course::LEGACY_HOLES;

/// Dampening exponent for the hole-count adjustment.
const HOLES_EXPONENT: f64 = 0.2;

/// Floor for the estimate where the lowest band reaches zero, at a rating of 50.
const MIN_POINTS_PER_STROKE: f64 = f64::EPSILON;

/// Estimates how many rating points one stroke is worth at `rating`.
///
/// Continuous across every band boundary and always positive. Ratings of 50
/// or below, where the lowest band would reach zero, get a tiny positive floor.
#[must_use]
pub fn points_per_stroke(rating: f64) -> f64 {
    if rating <= 150.0 {
        // Extrapolates downwards through (100, 2) and (150, 4).
        (2.0 + ((rating - 100.0) / 50.0) * 2.0).max(MIN_POINTS_PER_STROKE)
    } else if rating <= 200.0 {
        let t = (rating - 150.0) / 50.0;
        4.0 + t * 3.0
    } else if rating <= 230.0 {
        let t = (rating - 200.0) / 30.0;
        7.0 + t * 3.0
    } else {
        let t = ((rating - 230.0) / 50.0).min(1.0);
        10.0 + t * 5.0
    }
}

/// Rescales points per stroke for layouts that are not 18 holes long.
///
/// Fewer holes make every stroke count for more of the round rating, so a
/// 9-hole layout ends up with roughly 1.15 times the 18-hole value. An unknown
/// hole count leaves the value unchanged.
#[must_use]
pub fn adjust_for_holes(points_per_stroke: f64, holes: Option<NonZeroU32>) -> f64 {
    match holes {
        Some(holes) => {
            let ratio = f64::from(LEGACY_HOLES) / f64::from(holes.get());
            points_per_stroke * ratio.powf(HOLES_EXPONENT)
        }
        None => points_per_stroke,
    }
}
