//! Configuration file loading for the calculator.
//!
//! This module loads calculator settings and extra courses from a TOML file.

use handicap_core::{Course, StrokePercentage};
use handicap_courses::{builtin_directory, CourseDirectory, DirectoryError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or applying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured stroke percentage is above 100.
    #[error("Invalid stroke percentage in config: {0} (expected 0 to 100)")]
    InvalidStrokePercentage(u32),
    /// A configured course file could not be loaded.
    #[error("Failed to load course file {path}: {source}")]
    CourseFile {
        path: PathBuf,
        #[source]
        source: DirectoryError,
    },
}

/// Calculator configuration.
///
/// Uses `handicap.toml` in the current directory by default. Courses are
/// written with the same keys as course files:
///
/// ```toml
/// stroke_percentage = 75
/// course_files = ["club-courses.json"]
///
/// [[courses]]
/// name = "Backyard"
/// parRating = 120
/// holes = 6
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Share of the handicap difference handed out as strokes.
    /// Defaults to 80.
    #[serde(default = "default_stroke_percentage")]
    pub stroke_percentage: u32,
    /// JSON course files merged after the built-in courses, in order.
    #[serde(default)]
    pub course_files: Vec<PathBuf>,
    /// Courses defined inline, merged last.
    #[serde(default)]
    pub courses: Vec<Course>,
}

fn default_stroke_percentage() -> u32 {
    u32::from(StrokePercentage::DEFAULT.get())
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            stroke_percentage: default_stroke_percentage(),
            course_files: Vec::new(),
            courses: Vec::new(),
        }
    }
}

impl CalculatorConfig {
    /// Loads the configuration from `path`, or from [`Self::config_path()`].
    ///
    /// A missing default file yields the default configuration. A path that
    /// was asked for explicitly must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = Self::config_path();
                if !default_path.exists() {
                    tracing::debug!("No {} found, using defaults", default_path.display());
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(&config_path)?;
        let config = toml::from_str(&content)?;
        tracing::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Returns the path to the default configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("handicap.toml")
    }

    /// Returns the configured stroke percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStrokePercentage`] if it exceeds 100.
    pub fn stroke_percentage(&self) -> Result<StrokePercentage, ConfigError> {
        StrokePercentage::try_from(self.stroke_percentage)
            .map_err(|_| ConfigError::InvalidStrokePercentage(self.stroke_percentage))
    }

    /// Builds the course directory: built-in courses, then course files, then inline courses.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CourseFile`] if a course file cannot be loaded.
    pub fn directory(&self) -> Result<CourseDirectory, ConfigError> {
        let mut directory = builtin_directory();

        for path in &self.course_files {
            let extra = CourseDirectory::load(path).map_err(|source| ConfigError::CourseFile {
                path: path.clone(),
                source,
            })?;
            directory.merge(extra);
        }

        directory.merge(CourseDirectory::with_courses(self.courses.clone()));
        Ok(directory)
    }
}
