//! The hidden sequence a player is trying to guess.

use crate::types::{Colour, ROW_LENGTH};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The hidden colour sequence, immutable for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret([Colour; ROW_LENGTH]);

impl Secret {
    /// Draws a secret of independently uniform colours from the first
    /// `palette_size` palette entries. Repeats are allowed.
    ///
    /// The caller supplies the RNG, so tests can pass a seeded source.
    #[instrument(skip(rng))]
    pub fn random(palette_size: usize, rng: &mut impl Rng) -> Self {
        debug_assert!(
            palette_size >= 1 && palette_size <= Colour::ALL.len(),
            "palette size out of range"
        );
        let mut colours = [Colour::ALL[0]; ROW_LENGTH];
        for colour in &mut colours {
            *colour = Colour::ALL[rng.gen_range(0..palette_size)];
        }
        Self(colours)
    }

    /// Creates a secret from known colours.
    pub fn from_colours(colours: [Colour; ROW_LENGTH]) -> Self {
        Self(colours)
    }

    /// Returns the hidden colours.
    pub fn colours(&self) -> &[Colour; ROW_LENGTH] {
        &self.0
    }

    /// Returns the colour at the given position.
    pub fn get(&self, position: usize) -> Option<Colour> {
        self.0.get(position).copied()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.0.iter().map(Colour::label).collect();
        write!(f, "{}", labels.join(" "))
    }
}
