//! Session configuration.

use crate::types::Colour;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board dimensions for a session.
///
/// Row length is a fixed engine dimension ([`crate::ROW_LENGTH`]); the
/// palette size and attempt limit are the configurable knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How many palette colours are in play (a prefix of [`Colour::ALL`]).
    palette_size: usize,
    /// How many guess rows the board holds.
    attempt_limit: usize,
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PaletteOutOfRange`] unless `palette_size` is
    /// within `2..=6`, and [`ConfigError::NoAttempts`] for a zero attempt
    /// limit.
    #[instrument]
    pub fn new(palette_size: usize, attempt_limit: usize) -> Result<Self, ConfigError> {
        if palette_size < 2 || palette_size > Colour::ALL.len() {
            return Err(ConfigError::PaletteOutOfRange(palette_size));
        }
        if attempt_limit == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(Self {
            palette_size,
            attempt_limit,
        })
    }

    /// Number of palette colours in play.
    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// Number of guess rows on the board.
    pub fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }
}

impl Default for GameConfig {
    /// The classic board: six colours, twelve attempts.
    fn default() -> Self {
        Self {
            palette_size: Colour::ALL.len(),
            attempt_limit: 12,
        }
    }
}

/// Error raised for invalid session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Palette size outside the supported range.
    #[display("palette size {} is outside 2..=6", _0)]
    PaletteOutOfRange(usize),
    /// An attempt limit of zero leaves no rows to play.
    #[display("attempt limit must be at least 1")]
    NoAttempts,
}

impl std::error::Error for ConfigError {}
