//! Course directory storage and lookup.

use std::path::Path;

use handicap_core::Course;
use thiserror::Error;

/// Errors that can occur when working with course directories.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Failed to read a course file.
    #[error("failed to read course file: {0}")]
    Io(#[from] std::io::Error),

    /// A course file is not a valid list of course records.
    #[error("invalid course file: {0}")]
    Json(#[from] serde_json::Error),

    /// No course with the requested name exists.
    #[error("course not found: {0}")]
    CourseNotFound(String),
}

/// An ordered list of courses a player can pick from.
///
/// Course names are treated as display labels. Looking a course up by name
/// returns the first match, and [`CourseDirectory::merge`] replaces a record
/// that shares its name with an incoming one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDirectory {
    courses: Vec<Course>,
}

impl CourseDirectory {
    /// Creates a new empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding the given courses, in order.
    #[must_use]
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Parses a JSON array of `{name, parRating, holes?}` records.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Ok(Self::with_courses(courses))
    }

    /// Loads a directory from a JSON course file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let directory = Self::from_json(&content)?;
        tracing::info!(
            "Loaded {} courses from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// Returns the number of courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if the directory has no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Appends a course.
    pub fn add(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Returns all courses in directory order.
    #[must_use]
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    /// Finds a course by its exact name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    /// Finds a course by its exact name, failing if it is missing.
    pub fn get(&self, name: &str) -> Result<&Course, DirectoryError> {
        self.by_name(name)
            .ok_or_else(|| DirectoryError::CourseNotFound(name.to_string()))
    }

    /// Searches for courses by name (case-insensitive substring match).
    ///
    /// An empty query matches every course.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let query_lower = query.trim().to_lowercase();
        self.courses
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Merges another directory's courses into this one.
    ///
    /// Incoming courses replace existing ones with the same name, the rest
    /// are appended in order.
    pub fn merge(&mut self, other: CourseDirectory) {
        for course in other.courses {
            match self.courses.iter_mut().find(|c| c.name == course.name) {
                Some(existing) => {
                    tracing::debug!("Replacing course {}", course.name);
                    *existing = course;
                }
                None => {
                    tracing::debug!("Adding course {}", course.name);
                    self.courses.push(course);
                }
            }
        }
    }
}
