//! Disc golf course directory.
//!
//! This crate provides the list of courses offered by the calculators. It
//! ships a built-in set of layouts and can merge in extra courses loaded from
//! JSON files.

pub mod builtin;
pub mod directory;

pub use builtin::builtin_directory;
pub use directory::{CourseDirectory, DirectoryError};
