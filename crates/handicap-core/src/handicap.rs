//! Rating-to-handicap conversion.

use crate::course::Course;
use crate::points::{adjust_for_holes, points_per_stroke};

/// Fraction of the holes a player may be expected to gain a stroke on.
const BEST_CASE_FACTOR: f64 = 0.9;

/// Strokes per hole a player may be expected to lose at most.
const WORST_CASE_FACTOR: f64 = 2.0;

/// Inclusive range a handicap is clamped into for a given hole count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandicapBounds {
    /// Lowest handicap, `-floor(holes * 0.9)`.
    pub min: i32,
    /// Highest handicap, `holes * 2`.
    pub max: i32,
}

impl HandicapBounds {
    /// Returns the bounds for a layout with `holes` holes.
    #[must_use]
    pub fn for_holes(holes: u32) -> Self {
        let holes = f64::from(holes);
        Self {
            min: -(holes * BEST_CASE_FACTOR).floor() as i32,
            max: (holes * WORST_CASE_FACTOR) as i32,
        }
    }

    /// Returns the bounds for a course, treating a missing hole count as 18.
    #[must_use]
    pub fn for_course(course: &Course) -> Self {
        Self::for_holes(course.effective_holes())
    }

    /// Returns true if `handicap` lies within the bounds.
    #[inline]
    #[must_use]
    pub fn contains(&self, handicap: i32) -> bool {
        (self.min..=self.max).contains(&handicap)
    }

    /// Clamps a raw handicap into the bounds and rounds it half away from zero.
    #[must_use]
    pub fn clamp(&self, raw: f64) -> i32 {
        raw.clamp(f64::from(self.min), f64::from(self.max)).round() as i32
    }
}

/// Intermediate values of the scaling step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    /// The higher of the player rating and the par rating.
    pub reference_rating: f64,
    /// Points per stroke at the reference rating.
    pub base_points_per_stroke: f64,
    /// Points per stroke after the hole-count adjustment.
    pub adjusted_points_per_stroke: f64,
    /// Handicap before clamping and rounding.
    pub raw_handicap: f64,
}

/// Every value that goes into a single handicap calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandicapBreakdown {
    pub rating: f64,
    pub par_rating: f64,
    /// `rating - par_rating`. Positive means the player is stronger than par.
    pub rating_gap: f64,
    /// `None` when the rating matches the par rating exactly.
    pub scaling: Option<Scaling>,
    pub bounds: HandicapBounds,
    pub handicap: i32,
}

/// Calculates the handicap of a player rated `rating` on `course`.
///
/// Negative handicaps belong to players rated above the course's par rating,
/// positive ones to players rated below it. The result always lies within
/// [`HandicapBounds::for_course`].
///
/// # Example
///
/// ```
/// use handicap_core::{calculate_handicap, Course};
///
/// let course = Course::legacy("Local Layout", 144.0);
/// assert_eq!(calculate_handicap(&course, 144.0), 0);
/// assert!(calculate_handicap(&course, 130.0) > 0);
/// ```
#[must_use]
pub fn calculate_handicap(course: &Course, rating: f64) -> i32 {
    explain_handicap(course, rating).handicap
}

/// Calculates a handicap and returns the intermediate values along with it.
#[must_use]
pub fn explain_handicap(course: &Course, rating: f64) -> HandicapBreakdown {
    let rating_gap = rating - course.par_rating;
    let bounds = HandicapBounds::for_course(course);

    if rating_gap == 0.0 {
        return HandicapBreakdown {
            rating,
            par_rating: course.par_rating,
            rating_gap,
            scaling: None,
            bounds,
            handicap: 0,
        };
    }

    // Stroke value is set by the stronger end of the pairing.
    let reference_rating = rating.max(course.par_rating);
    let base_points_per_stroke = points_per_stroke(reference_rating);
    let adjusted_points_per_stroke = adjust_for_holes(base_points_per_stroke, course.holes);
    let raw_handicap = -rating_gap / adjusted_points_per_stroke;

    HandicapBreakdown {
        rating,
        par_rating: course.par_rating,
        rating_gap,
        scaling: Some(Scaling {
            reference_rating,
            base_points_per_stroke,
            adjusted_points_per_stroke,
            raw_handicap,
        }),
        bounds,
        handicap: bounds.clamp(raw_handicap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn course(par_rating: f64, holes: u32) -> Course {
        Course::new("Test Layout", par_rating, NonZeroU32::new(holes).unwrap())
    }

    #[test]
    fn low_rated_course_keeps_sign() {
        // Both ratings sit where the lowest band would reach zero or below.
        let layout = course(30.0, 18);
        assert_eq!(calculate_handicap(&layout, 20.0), 36);
        assert_eq!(calculate_handicap(&layout, 40.0), -16);

        let layout = course(50.0, 18);
        assert_eq!(calculate_handicap(&layout, 49.0), 36);
        let breakdown = explain_handicap(&layout, 49.0);
        assert!(breakdown.scaling.unwrap().raw_handicap.is_finite());
    }

    #[test]
    fn bounds_for_common_layouts() {
        assert_eq!(HandicapBounds::for_holes(18), HandicapBounds { min: -16, max: 36 });
        assert_eq!(HandicapBounds::for_holes(9), HandicapBounds { min: -8, max: 18 });
        assert_eq!(HandicapBounds::for_holes(1), HandicapBounds { min: 0, max: 2 });
        assert_eq!(HandicapBounds::for_holes(24), HandicapBounds { min: -21, max: 48 });
    }

    #[test]
    fn legacy_course_bounds() {
        let legacy = Course::legacy("Old", 100.0);
        assert_eq!(HandicapBounds::for_course(&legacy), HandicapBounds::for_holes(18));
    }

    #[test]
    fn clamp_rounds_half_away_from_zero() {
        let bounds = HandicapBounds::for_holes(18);
        assert_eq!(bounds.clamp(2.5), 3);
        assert_eq!(bounds.clamp(-2.5), -3);
        assert_eq!(bounds.clamp(2.49), 2);
        assert_eq!(bounds.clamp(-0.4), 0);
    }

    #[test]
    fn clamp_limits() {
        let bounds = HandicapBounds::for_holes(9);
        assert_eq!(bounds.clamp(-100.0), -8);
        assert_eq!(bounds.clamp(100.0), 18);
        assert_eq!(bounds.clamp(f64::NEG_INFINITY), -8);
        assert_eq!(bounds.clamp(f64::INFINITY), 18);
        assert!(bounds.contains(-8));
        assert!(bounds.contains(18));
        assert!(!bounds.contains(19));
    }

    #[test]
    fn exact_match_is_zero() {
        let breakdown = explain_handicap(&course(130.0, 9), 130.0);
        assert_eq!(breakdown.handicap, 0);
        assert!(breakdown.scaling.is_none());
    }

    #[test]
    fn weaker_player_gets_positive_handicap() {
        // Reference rating is the par rating: 2 + (44 / 50) * 2 = 3.76 points per stroke.
        let breakdown = explain_handicap(&course(144.0, 18), 130.0);
        let scaling = breakdown.scaling.unwrap();
        assert_eq!(scaling.reference_rating, 144.0);
        assert!((scaling.base_points_per_stroke - 3.76).abs() < 1e-9);
        assert!((scaling.adjusted_points_per_stroke - 3.76).abs() < 1e-9);
        assert!((scaling.raw_handicap - 14.0 / 3.76).abs() < 1e-9);
        assert_eq!(breakdown.handicap, 4);
    }

    #[test]
    fn stronger_player_gets_negative_handicap() {
        // Reference rating is the player's: 2 + (34 / 50) * 2 = 3.36 points per stroke.
        let breakdown = explain_handicap(&course(130.0, 18), 134.0);
        assert_eq!(breakdown.scaling.unwrap().reference_rating, 134.0);
        assert_eq!(breakdown.handicap, -1);
    }

    #[test]
    fn nine_hole_layout_scales_points() {
        let nine = explain_handicap(&course(130.0, 9), 150.0);
        let scaling = nine.scaling.unwrap();
        assert!((scaling.base_points_per_stroke - 4.0).abs() < 1e-9);
        assert!((scaling.adjusted_points_per_stroke - 4.0 * 2f64.powf(0.2)).abs() < 1e-9);
        // -20 / 4.5948 = -4.35
        assert_eq!(nine.handicap, -4);

        let eighteen = calculate_handicap(&course(130.0, 18), 150.0);
        assert_eq!(eighteen, -5);
    }

    #[test]
    fn strong_player_clamped_to_best_case() {
        assert_eq!(calculate_handicap(&course(100.0, 9), 300.0), -8);
        assert_eq!(calculate_handicap(&course(100.0, 18), 300.0), -13);
        assert_eq!(calculate_handicap(&course(100.0, 18), 350.0), -16);
    }

    #[test]
    fn weak_player_clamped_to_worst_case() {
        assert_eq!(calculate_handicap(&course(250.0, 9), 0.0), 18);
    }

    #[test]
    fn legacy_course_matches_eighteen_holes() {
        let legacy = Course::legacy("Old", 144.0);
        let modern = course(144.0, 18);
        for rating in [80.0, 120.5, 144.0, 160.0, 233.3] {
            assert_eq!(
                calculate_handicap(&legacy, rating),
                calculate_handicap(&modern, rating)
            );
        }
    }

    #[test]
    fn calculate_matches_breakdown() {
        let layout = course(144.0, 9);
        for rating in [100.0, 143.9, 144.1, 200.0, 260.0] {
            assert_eq!(
                calculate_handicap(&layout, rating),
                explain_handicap(&layout, rating).handicap
            );
        }
    }
}
