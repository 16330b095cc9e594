//! Core handicap calculation for disc golf.
//!
//! This crate converts a player's UDisc rating and a course's par rating into
//! an integer stroke handicap, and derives a fair stroke allotment between two
//! players from their handicaps:
//! - [`Course`] for the layout being played
//! - [`points_per_stroke`] and [`adjust_for_holes`] for rating-to-stroke scaling
//! - [`calculate_handicap`] and [`explain_handicap`] for single-player handicaps
//! - [`compare_players`] for two-player stroke allotments
//! - Input parsing for user-entered ratings, hole counts and percentages
//!
//! Every calculation is a pure function of its arguments.

mod course;
mod handicap;
mod input;
mod points;
mod strokes;

pub use course::{Course, LEGACY_HOLES};
pub use handicap::{
    calculate_handicap, explain_handicap, HandicapBounds, HandicapBreakdown, Scaling,
};
pub use input::{
    parse_holes, parse_rating, parse_stroke_percentage, InputError, ManualCourse,
    CUSTOM_COURSE_NAME,
};
pub use points::{adjust_for_holes, points_per_stroke};
pub use strokes::{compare_players, Player, StrokeAllotment, StrokeComparison, StrokePercentage};
