//! Core domain types for mastermind.

use serde::{Deserialize, Serialize};

/// Number of slots in a guess row and in the secret.
pub const ROW_LENGTH: usize = 4;

/// A game-piece colour.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    /// Red piece.
    Red,
    /// Green piece.
    Green,
    /// Blue piece.
    Blue,
    /// Yellow piece.
    Yellow,
    /// Orange piece.
    Orange,
    /// Purple piece.
    Purple,
}

impl Colour {
    /// The full palette, in cycle order.
    pub const ALL: [Colour; 6] = [
        Colour::Red,
        Colour::Green,
        Colour::Blue,
        Colour::Yellow,
        Colour::Orange,
        Colour::Purple,
    ];

    /// Get label for this colour (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
            Colour::Yellow => "yellow",
            Colour::Orange => "orange",
            Colour::Purple => "purple",
        }
    }

    /// Parse from a display label (case-insensitive).
    pub fn from_label(s: &str) -> Option<Colour> {
        let s = s.trim().to_lowercase();
        <Colour as strum::IntoEnumIterator>::iter().find(|colour| colour.label() == s)
    }

    /// Converts colour to its palette index.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates colour from a palette index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A position within a guess row.
///
/// `Empty` is the unset sentinel: it is distinct from every palette colour,
/// which is what keeps the scoring passes from matching consumed slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// No colour chosen yet.
    Empty,
    /// Slot holds a palette colour.
    Filled(Colour),
}

impl Slot {
    /// Checks if the slot is unset.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns the slot's colour, if any.
    pub fn colour(&self) -> Option<Colour> {
        match self {
            Slot::Empty => None,
            Slot::Filled(colour) => Some(*colour),
        }
    }

    /// Returns the next slot value in the click cycle: empty, then each of
    /// the first `palette_size` colours in order, wrapping back to empty.
    #[must_use]
    pub fn cycle(self, palette_size: usize) -> Slot {
        match self {
            Slot::Empty => Slot::Filled(Colour::ALL[0]),
            Slot::Filled(colour) => {
                let next = colour.to_index() + 1;
                match Colour::from_index(next) {
                    Some(colour) if next < palette_size => Slot::Filled(colour),
                    _ => Slot::Empty,
                }
            }
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Slot::Empty
    }
}

/// Score for a submitted guess.
///
/// `exact` counts slots with the right colour in the right position (black
/// pegs); `colour` counts right colours in the wrong position (white pegs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    exact: u8,
    colour: u8,
}

impl Feedback {
    /// Creates feedback from exact and colour-only counts.
    pub fn new(exact: u8, colour: u8) -> Self {
        debug_assert!(
            (exact + colour) as usize <= ROW_LENGTH,
            "feedback counts exceed row length"
        );
        Self { exact, colour }
    }

    /// Right colour, right position.
    pub fn exact(&self) -> u8 {
        self.exact
    }

    /// Right colour, wrong position.
    pub fn colour(&self) -> u8 {
        self.colour
    }

    /// Checks whether every slot matched in colour and position.
    pub fn is_win(&self) -> bool {
        self.exact as usize == ROW_LENGTH
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} exact, {} colour", self.exact, self.colour)
    }
}

/// Current outcome of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Attempts remain and the secret is unguessed.
    InProgress,
    /// A guess matched the secret.
    Won,
    /// Every attempt was spent without a match.
    Lost,
}

impl Outcome {
    /// Checks whether the session has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won => write!(f, "won"),
            Outcome::Lost => write!(f, "lost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_walks_full_palette() {
        let mut slot = Slot::Empty;
        for colour in Colour::ALL {
            slot = slot.cycle(Colour::ALL.len());
            assert_eq!(slot, Slot::Filled(colour));
        }
        assert_eq!(slot.cycle(Colour::ALL.len()), Slot::Empty);
    }

    #[test]
    fn test_cycle_wraps_within_restricted_palette() {
        let slot = Slot::Filled(Colour::Blue);
        // Blue is the last colour of a three-colour palette.
        assert_eq!(slot.cycle(3), Slot::Empty);
        assert_eq!(Slot::Empty.cycle(3), Slot::Filled(Colour::Red));
    }

    #[test]
    fn test_label_round_trip() {
        for colour in Colour::ALL {
            assert_eq!(Colour::from_label(colour.label()), Some(colour));
        }
        assert_eq!(Colour::from_label("BLUE"), Some(Colour::Blue));
        assert_eq!(Colour::from_label("mauve"), None);
    }

    #[test]
    fn test_index_round_trip() {
        for (index, colour) in Colour::ALL.into_iter().enumerate() {
            assert_eq!(colour.to_index(), index);
            assert_eq!(Colour::from_index(index), Some(colour));
        }
        assert_eq!(Colour::from_index(6), None);
    }

    #[test]
    fn test_feedback_win_requires_four_exact() {
        assert!(Feedback::new(4, 0).is_win());
        assert!(!Feedback::new(3, 1).is_win());
        assert!(!Feedback::new(0, 4).is_win());
    }
}
