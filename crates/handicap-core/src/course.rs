//! Course representation.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Hole count assumed for course records that predate the `holes` field.
pub const LEGACY_HOLES: u32 = 18;

/// A disc golf layout with its UDisc par rating.
///
/// Records from the older course list carry no hole count. Those are treated
/// as 18-hole layouts everywhere a hole count is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Display name, only used for presentation.
    pub name: String,
    /// Rating an average round on this layout earns.
    pub par_rating: f64,
    /// Number of holes in the layout, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holes: Option<NonZeroU32>,
}

impl Course {
    /// Creates a course with a known hole count.
    #[must_use]
    pub fn new(name: impl Into<String>, par_rating: f64, holes: NonZeroU32) -> Self {
        Self {
            name: name.into(),
            par_rating,
            holes: Some(holes),
        }
    }

    /// Creates a course record without a hole count.
    #[must_use]
    pub fn legacy(name: impl Into<String>, par_rating: f64) -> Self {
        Self {
            name: name.into(),
            par_rating,
            holes: None,
        }
    }

    /// Returns the hole count, falling back to [`LEGACY_HOLES`].
    #[inline]
    #[must_use]
    pub fn effective_holes(&self) -> u32 {
        self.holes.map_or(LEGACY_HOLES, NonZeroU32::get)
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.holes {
            Some(holes) => write!(
                f,
                "{} (par rating {}, {} holes)",
                self.name, self.par_rating, holes
            ),
            None => write!(f, "{} (par rating {})", self.name, self.par_rating),
        }
    }
}
