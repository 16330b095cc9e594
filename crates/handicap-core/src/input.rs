//! Validation of user-entered values.
//!
//! The calculation functions assume finite ratings and a positive hole count.
//! Front ends run raw text through these parsers first and refuse to calculate
//! until every field passes.

use std::num::NonZeroU32;

use thiserror::Error;

use crate::course::Course;
use crate::strokes::StrokePercentage;

/// Name given to a manually entered course left unnamed.
pub const CUSTOM_COURSE_NAME: &str = "Custom Course";

/// Errors that can occur when parsing user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} is required")]
    Empty(&'static str),

    #[error("invalid {field}: '{value}' is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("invalid {field}: must be a finite number")]
    NotFinite { field: &'static str },

    #[error("invalid holes: expected a positive hole count, got {0}")]
    NonPositiveHoles(i64),

    #[error("invalid stroke percentage: expected 0 to 100, got {0}")]
    StrokePercentageOutOfRange(u32),
}

fn non_empty<'a>(field: &'static str, input: &'a str) -> Result<&'a str, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty(field));
    }
    Ok(trimmed)
}

fn parse_finite(field: &'static str, input: &str) -> Result<f64, InputError> {
    let trimmed = non_empty(field, input)?;
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            value: trimmed.to_string(),
        })?;

    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }

    Ok(value)
}

/// Parses a UDisc rating.
pub fn parse_rating(input: &str) -> Result<f64, InputError> {
    parse_finite("rating", input)
}

/// Parses a course par rating.
fn parse_par_rating(input: &str) -> Result<f64, InputError> {
    parse_finite("par rating", input)
}

/// Parses a hole count, which must be a positive whole number.
pub fn parse_holes(input: &str) -> Result<NonZeroU32, InputError> {
    let trimmed = non_empty("holes", input)?;
    let not_a_number = || InputError::NotANumber {
        field: "holes",
        value: trimmed.to_string(),
    };

    let holes = trimmed.parse::<i64>().map_err(|_| not_a_number())?;
    if holes <= 0 {
        return Err(InputError::NonPositiveHoles(holes));
    }

    u32::try_from(holes)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(not_a_number)
}

/// Parses a stroke percentage between 0 and 100.
pub fn parse_stroke_percentage(input: &str) -> Result<StrokePercentage, InputError> {
    let trimmed = non_empty("stroke percentage", input)?;
    let percent = trimmed
        .parse::<u32>()
        .map_err(|_| InputError::NotANumber {
            field: "stroke percentage",
            value: trimmed.to_string(),
        })?;
    StrokePercentage::try_from(percent)
}

/// A course typed in by hand rather than picked from the directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualCourse<'a> {
    /// Optional display name, blank falls back to [`CUSTOM_COURSE_NAME`].
    pub name: &'a str,
    pub par_rating: &'a str,
    /// `None` builds a course without a hole count.
    pub holes: Option<&'a str>,
}

impl ManualCourse<'_> {
    /// Validates every field and builds the course.
    pub fn parse(&self) -> Result<Course, InputError> {
        let par_rating = parse_par_rating(self.par_rating)?;
        let holes = self.holes.map(parse_holes).transpose()?;

        let name = match self.name.trim() {
            "" => CUSTOM_COURSE_NAME,
            name => name,
        };

        Ok(Course {
            name: name.to_string(),
            par_rating,
            holes,
        })
    }
}
