//! Stroke allotment between two players.
//!
//! The weaker player receives a share of the handicap difference as strokes
//! they may take off any holes of their choosing, picked before the round.

use crate::course::Course;
use crate::handicap::calculate_handicap;
use crate::input::InputError;

/// Share of the handicap difference handed out as strokes, in percent.
///
/// Always within `0..=100`. Defaults to 80, which keeps the weaker player
/// from being overcompensated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokePercentage(u8);

impl StrokePercentage {
    /// The percentage used when none is configured.
    pub const DEFAULT: Self = Self(80);
    /// Hands out the full handicap difference.
    pub const FULL: Self = Self(100);

    /// Creates a percentage, returning `None` if it exceeds 100.
    #[must_use]
    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= 100 {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Returns the percentage as a whole number.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the percentage as a fraction in `0.0..=1.0`.
    #[inline]
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for StrokePercentage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for StrokePercentage {
    type Error = InputError;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        u8::try_from(percent)
            .ok()
            .and_then(Self::new)
            .ok_or(InputError::StrokePercentageOutOfRange(percent))
    }
}

impl std::fmt::Display for StrokePercentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One of the two players being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other player.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "person one"),
            Player::Two => write!(f, "person two"),
        }
    }
}

/// Outcome of comparing two players' handicaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeAllotment {
    /// Nothing is left to hand out after applying the percentage.
    Even,
    /// `recipient` gets `strokes` strokes to place on holes of their choice.
    Strokes { recipient: Player, strokes: u32 },
}

impl StrokeAllotment {
    /// Returns the number of strokes handed out.
    #[must_use]
    pub fn strokes(&self) -> u32 {
        match self {
            StrokeAllotment::Even => 0,
            StrokeAllotment::Strokes { strokes, .. } => *strokes,
        }
    }

    /// Returns the player receiving strokes, if any.
    #[must_use]
    pub fn recipient(&self) -> Option<Player> {
        match self {
            StrokeAllotment::Even => None,
            StrokeAllotment::Strokes { recipient, .. } => Some(*recipient),
        }
    }
}

impl std::fmt::Display for StrokeAllotment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrokeAllotment::Even => {
                write!(f, "No strokes given. Both players have equal handicaps.")
            }
            StrokeAllotment::Strokes { recipient, strokes } => {
                let recipient = recipient.to_string();
                let mut capitalized = recipient.clone();
                capitalized[..1].make_ascii_uppercase();
                write!(
                    f,
                    "{} gets {} stroke{} to be chosen on any holes. \
                     Holes must be predetermined before the match starts by {}.",
                    capitalized,
                    strokes,
                    if *strokes == 1 { "" } else { "s" },
                    recipient
                )
            }
        }
    }
}

/// Both handicaps and the resulting allotment for a two-player match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeComparison {
    pub handicap_one: i32,
    pub handicap_two: i32,
    /// Absolute difference between the two handicaps, before the percentage.
    pub difference: u32,
    pub allotment: StrokeAllotment,
}

/// Compares two players on `course` and works out the strokes the weaker one receives.
///
/// The player with the strictly lower handicap is the stronger one. Equal
/// handicaps, or a difference that rounds down to nothing, hand out no strokes.
#[must_use]
pub fn compare_players(
    course: &Course,
    rating_one: f64,
    rating_two: f64,
    percentage: StrokePercentage,
) -> StrokeComparison {
    let handicap_one = calculate_handicap(course, rating_one);
    let handicap_two = calculate_handicap(course, rating_two);
    let difference = handicap_one.abs_diff(handicap_two);
    let adjusted = (f64::from(difference) * percentage.fraction()).floor() as u32;

    let stronger = if handicap_one < handicap_two {
        Player::One
    } else {
        Player::Two
    };
    let allotment = if adjusted == 0 {
        StrokeAllotment::Even
    } else {
        StrokeAllotment::Strokes {
            recipient: stronger.other(),
            strokes: adjusted,
        }
    };

    StrokeComparison {
        handicap_one,
        handicap_two,
        difference,
        allotment,
    }
}
