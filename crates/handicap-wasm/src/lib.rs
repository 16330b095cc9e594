//! WebAssembly bindings for the handicap calculator.
//!
//! This crate provides a JavaScript-friendly API for the two calculators and
//! the course picker, allowing them to run in web browsers and Node.js.
//!
//! # Usage
//!
//! ```javascript
//! import init, { calculateHandicap, strokeDifferenceFromInput, courseNames } from 'handicap-wasm';
//!
//! await init();
//!
//! console.log(courseNames());
//! console.log(calculateHandicap(130, 9, 150));
//!
//! const result = strokeDifferenceFromInput("130", "18", "134", "120", "80");
//! console.log(result.message);
//! ```

use std::num::NonZeroU32;

use handicap_core::{
    calculate_handicap as handicap_on, compare_players, parse_rating, parse_stroke_percentage,
    Course, InputError, ManualCourse, Player, StrokePercentage,
};
use handicap_courses::builtin_directory;
use wasm_bindgen::prelude::*;

/// A course from the built-in directory.
#[wasm_bindgen(getter_with_clone)]
#[derive(Debug, Clone, PartialEq)]
pub struct CourseInfo {
    pub name: String,
    #[wasm_bindgen(js_name = parRating)]
    pub par_rating: f64,
    /// Hole count, or undefined for records without one.
    pub holes: Option<u32>,
}

impl From<&Course> for CourseInfo {
    fn from(course: &Course) -> Self {
        CourseInfo {
            name: course.name.clone(),
            par_rating: course.par_rating,
            holes: course.holes.map(NonZeroU32::get),
        }
    }
}

/// Result of a stroke difference calculation.
#[wasm_bindgen(getter_with_clone)]
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeResult {
    #[wasm_bindgen(js_name = handicapOne)]
    pub handicap_one: i32,
    #[wasm_bindgen(js_name = handicapTwo)]
    pub handicap_two: i32,
    pub strokes: u32,
    /// 1 or 2, or undefined when no strokes are given.
    pub recipient: Option<u8>,
    /// The sentence shown to the players.
    pub message: String,
}

fn course_from_parts(par_rating: f64, holes: Option<u32>) -> Result<Course, InputError> {
    let holes = match holes {
        Some(count) => Some(NonZeroU32::new(count).ok_or(InputError::NonPositiveHoles(0))?),
        None => None,
    };
    Ok(Course {
        name: String::new(),
        par_rating,
        holes,
    })
}

fn stroke_result(
    course: &Course,
    rating_one: f64,
    rating_two: f64,
    percentage: StrokePercentage,
) -> StrokeResult {
    let comparison = compare_players(course, rating_one, rating_two, percentage);
    StrokeResult {
        handicap_one: comparison.handicap_one,
        handicap_two: comparison.handicap_two,
        strokes: comparison.allotment.strokes(),
        recipient: comparison.allotment.recipient().map(|player| match player {
            Player::One => 1,
            Player::Two => 2,
        }),
        message: comparison.allotment.to_string(),
    }
}

fn handicap_from_parts(
    par_rating: f64,
    holes: Option<u32>,
    rating: f64,
) -> Result<i32, InputError> {
    Ok(handicap_on(&course_from_parts(par_rating, holes)?, rating))
}

fn stroke_difference_from_parts(
    par_rating: f64,
    holes: Option<u32>,
    rating_one: f64,
    rating_two: f64,
    percentage: u32,
) -> Result<StrokeResult, InputError> {
    let course = course_from_parts(par_rating, holes)?;
    let percentage = StrokePercentage::try_from(percentage)?;
    Ok(stroke_result(&course, rating_one, rating_two, percentage))
}

fn manual_course(par_rating: &str, holes: &str) -> Result<Course, InputError> {
    ManualCourse {
        name: "",
        par_rating,
        holes: Some(holes),
    }
    .parse()
}

fn to_js(err: InputError) -> JsError {
    JsError::new(&err.to_string())
}

/// Calculates a handicap from already-validated numbers.
///
/// Leave `holes` undefined for courses without a hole count.
#[wasm_bindgen(js_name = calculateHandicap)]
pub fn calculate_handicap(
    par_rating: f64,
    holes: Option<u32>,
    rating: f64,
) -> Result<i32, JsError> {
    handicap_from_parts(par_rating, holes, rating).map_err(to_js)
}

/// Calculates the strokes given between two players from already-validated numbers.
#[wasm_bindgen(js_name = strokeDifference)]
pub fn stroke_difference(
    par_rating: f64,
    holes: Option<u32>,
    rating_one: f64,
    rating_two: f64,
    percentage: u32,
) -> Result<StrokeResult, JsError> {
    stroke_difference_from_parts(par_rating, holes, rating_one, rating_two, percentage)
        .map_err(to_js)
}

/// Validates form input and calculates a handicap.
///
/// Returns an error describing the first invalid field.
#[wasm_bindgen(js_name = handicapFromInput)]
pub fn handicap_from_input(par_rating: &str, holes: &str, rating: &str) -> Result<i32, JsError> {
    let course = manual_course(par_rating, holes).map_err(to_js)?;
    let rating = parse_rating(rating).map_err(to_js)?;
    Ok(handicap_on(&course, rating))
}

/// Validates form input and calculates the strokes given between two players.
///
/// An empty `percentage` uses the default of 80.
#[wasm_bindgen(js_name = strokeDifferenceFromInput)]
pub fn stroke_difference_from_input(
    par_rating: &str,
    holes: &str,
    rating_one: &str,
    rating_two: &str,
    percentage: &str,
) -> Result<StrokeResult, JsError> {
    let course = manual_course(par_rating, holes).map_err(to_js)?;
    let rating_one = parse_rating(rating_one).map_err(to_js)?;
    let rating_two = parse_rating(rating_two).map_err(to_js)?;
    let percentage = if percentage.trim().is_empty() {
        StrokePercentage::default()
    } else {
        parse_stroke_percentage(percentage).map_err(to_js)?
    };
    Ok(stroke_result(&course, rating_one, rating_two, percentage))
}

/// Returns the names of all built-in courses, in directory order.
#[wasm_bindgen(js_name = courseNames)]
pub fn course_names() -> Vec<String> {
    builtin_directory()
        .all()
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

/// Looks up a built-in course by its exact name.
#[wasm_bindgen(js_name = courseByName)]
pub fn course_by_name(name: &str) -> Option<CourseInfo> {
    builtin_directory().by_name(name).map(CourseInfo::from)
}

/// Returns the names of built-in courses matching a search query.
#[wasm_bindgen(js_name = searchCourses)]
pub fn search_courses(query: &str) -> Vec<String> {
    builtin_directory()
        .search(query)
        .into_iter()
        .map(|c| c.name.clone())
        .collect()
}

/// Returns all built-in courses as plain `{name, parRating, holes}` objects.
#[wasm_bindgen]
pub fn courses() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(builtin_directory().all())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Calculates a handicap on a built-in course.
#[wasm_bindgen(js_name = handicapOnCourse)]
pub fn handicap_on_course(name: &str, rating: f64) -> Option<i32> {
    builtin_directory()
        .by_name(name)
        .map(|course| handicap_on(course, rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handicap_from_numbers() {
        assert_eq!(handicap_from_parts(130.0, Some(9), 130.0), Ok(0));
        assert_eq!(handicap_from_parts(144.0, Some(18), 130.0), Ok(4));
        assert_eq!(
            handicap_from_parts(144.0, None, 130.0),
            handicap_from_parts(144.0, Some(18), 130.0)
        );
    }

    #[test]
    fn zero_holes_rejected() {
        assert_eq!(
            handicap_from_parts(130.0, Some(0), 140.0),
            Err(InputError::NonPositiveHoles(0))
        );
    }

    #[test]
    fn stroke_difference_from_numbers() {
        let result = stroke_difference_from_parts(130.0, Some(18), 134.0, 120.0, 80).unwrap();
        assert_eq!(result.handicap_one, -1);
        assert_eq!(result.handicap_two, 3);
        assert_eq!(result.strokes, 3);
        assert_eq!(result.recipient, Some(2));
        assert!(result.message.starts_with("Person two gets 3 strokes"));
    }

    #[test]
    fn stroke_difference_even() {
        let result = stroke_difference_from_parts(130.0, Some(18), 150.0, 150.0, 100).unwrap();
        assert_eq!(result.strokes, 0);
        assert_eq!(result.recipient, None);
        assert_eq!(
            result.message,
            "No strokes given. Both players have equal handicaps."
        );
    }

    #[test]
    fn stroke_percentage_out_of_range() {
        assert_eq!(
            stroke_difference_from_parts(130.0, Some(18), 134.0, 120.0, 101),
            Err(InputError::StrokePercentageOutOfRange(101))
        );
    }

    #[test]
    fn from_input_success() {
        assert_eq!(handicap_from_input("144", "18", "130").ok(), Some(4));

        let result = stroke_difference_from_input("130", "18", "120", "134", "")
            .ok()
            .unwrap();
        assert_eq!(result.recipient, Some(1));
        assert_eq!(result.strokes, 3);
    }

    #[test]
    fn manual_course_requires_holes() {
        assert_eq!(manual_course("130", " "), Err(InputError::Empty("holes")));
    }

    #[test]
    fn course_lookup() {
        let names = course_names();
        assert_eq!(names.len(), 4);

        let info = course_by_name(&names[0]).unwrap();
        assert_eq!(info.par_rating, 130.0);
        assert_eq!(info.holes, Some(9));
        assert!(course_by_name("Nowhere").is_none());
    }

    #[test]
    fn course_search() {
        assert_eq!(search_courses("bolender").len(), 1);
        assert_eq!(search_courses("").len(), 4);
    }

    #[test]
    fn handicap_on_builtin_course() {
        assert_eq!(
            handicap_on_course("Montgomery Park Aceplace (9 hole layout)", 130.0),
            Some(0)
        );
        assert_eq!(handicap_on_course("Nowhere", 130.0), None);
    }
}
