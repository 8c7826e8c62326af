//! Strictly Mastermind - pure code-breaking game logic.
//!
//! A hidden four-colour sequence must be guessed within a fixed number of
//! attempts; each submitted guess is scored as exact hits (right colour,
//! right position) and colour-only hits. The engine owns secret generation,
//! guess scoring, and the win/lose state machine. Frontends drive it
//! through [`GameSession`] and render the board snapshot it exposes; no
//! rendering or I/O happens here.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_mastermind::{GameConfig, GameSession};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = GameSession::new(GameConfig::default(), &mut rng);
//!
//! let row = session.active_row().expect("fresh session is active");
//! for column in 0..strictly_mastermind::ROW_LENGTH {
//!     session.cycle_slot(row, column).expect("row is active");
//! }
//! let submission = session.submit_guess().expect("row is complete");
//! println!("{}", submission.feedback());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod invariants;
mod kani_support;
mod rules;
mod secret;
mod session;
mod types;

// Crate-level exports - configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - domain types
pub use types::{Colour, Feedback, Outcome, Slot, ROW_LENGTH};

// Crate-level exports - board
pub use board::{Board, GuessRow};

// Crate-level exports - secret generation
pub use secret::Secret;

// Crate-level exports - scoring
pub use rules::score;

// Crate-level exports - session state machine
pub use session::{GameSession, Submission, TurnError};

// Crate-level exports - invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MastermindInvariants,
    RowProgressionInvariant, SecretInPaletteInvariant, SingleActiveRowInvariant,
};
