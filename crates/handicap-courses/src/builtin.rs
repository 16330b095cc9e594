//! Built-in course data.
//!
//! This module provides the layouts that are compiled into the library.

use std::num::NonZeroU32;

use handicap_core::Course;

use crate::directory::CourseDirectory;

const NINE: Option<NonZeroU32> = NonZeroU32::new(9);
const EIGHTEEN: Option<NonZeroU32> = NonZeroU32::new(18);

fn course(name: &str, par_rating: f64, holes: Option<NonZeroU32>) -> Course {
    Course {
        name: name.to_string(),
        par_rating,
        holes,
    }
}

/// Creates the built-in course directory.
#[must_use]
pub fn builtin_directory() -> CourseDirectory {
    CourseDirectory::with_courses(vec![
        course("Montgomery Park Aceplace (9 hole layout)", 130.0, NINE),
        course(
            "Haute Goat - Fling's Aceplace 25 ( 18 hole layout)",
            144.0,
            EIGHTEEN,
        ),
        course("Bolender Aceplace (9 hole layout)", 116.0, NINE),
        course(
            "Dartmouth Commons Disc Golf Course (9 hole layout)",
            144.0,
            NINE,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_courses() {
        let db = builtin_directory();
        assert_eq!(db.len(), 4);
    }

    #[test]
    fn test_builtin_courses_have_holes() {
        let db = builtin_directory();
        assert!(db.all().iter().all(|c| c.holes.is_some()));
    }

    #[test]
    fn test_builtin_names_unique() {
        let db = builtin_directory();
        let mut names: Vec<_> = db.all().iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), db.len());
    }

    #[test]
    fn test_builtin_montgomery_park() {
        let db = builtin_directory();
        let course = db.by_name("Montgomery Park Aceplace (9 hole layout)").unwrap();
        assert_eq!(course.par_rating, 130.0);
        assert_eq!(course.effective_holes(), 9);
    }

    #[test]
    fn test_builtin_haute_goat() {
        let db = builtin_directory();
        let results = db.search("haute goat");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].par_rating, 144.0);
        assert_eq!(results[0].effective_holes(), 18);
    }
}
