//! Single-player session driving the guess/feedback loop.

use crate::board::Board;
use crate::config::GameConfig;
use crate::invariants::{InvariantSet, MastermindInvariants};
use crate::rules;
use crate::secret::Secret;
use crate::types::{Feedback, Outcome, Slot};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Session phase: which row is open, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active(usize),
    Won,
    Lost,
}

/// An owned game session: configuration, the hidden secret, the board, and
/// the win/lose state machine.
///
/// All operations are synchronous and run to completion; the session is the
/// sole owner of the board, and frontends read snapshots through [`board`],
/// [`outcome`], and [`active_row`] after each command.
///
/// [`board`]: GameSession::board
/// [`outcome`]: GameSession::outcome
/// [`active_row`]: GameSession::active_row
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    secret: Secret,
    board: Board,
    phase: Phase,
}

impl GameSession {
    /// Creates a session with a freshly drawn secret.
    #[instrument(skip(rng))]
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Self {
        let secret = Secret::random(config.palette_size(), rng);
        Self::with_secret(config, secret)
    }

    /// Creates a session around a known secret.
    ///
    /// The secret's colours are expected to fall within the configured
    /// palette; [`SecretInPaletteInvariant`] flags violations in debug
    /// builds once play begins.
    ///
    /// [`SecretInPaletteInvariant`]: crate::SecretInPaletteInvariant
    #[instrument(skip(secret))]
    pub fn with_secret(config: GameConfig, secret: Secret) -> Self {
        let start = config.attempt_limit() - 1;
        let mut board = Board::new(config.attempt_limit());
        if let Some(row) = board.row_mut(start) {
            row.activate();
        }
        info!(
            palette_size = config.palette_size(),
            attempt_limit = config.attempt_limit(),
            "starting session"
        );
        Self {
            config,
            secret,
            board,
            phase: Phase::Active(start),
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Active(_) => Outcome::InProgress,
            Phase::Won => Outcome::Won,
            Phase::Lost => Outcome::Lost,
        }
    }

    /// Returns the index of the row open for input, if the game is still on.
    pub fn active_row(&self) -> Option<usize> {
        match self.phase {
            Phase::Active(row) => Some(row),
            Phase::Won | Phase::Lost => None,
        }
    }

    /// Checks whether the session has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Reveals the hidden sequence, for display after the game ends or on
    /// give-up. Idempotent; never changes state.
    pub fn reveal_secret(&self) -> &Secret {
        &self.secret
    }

    /// Cycles the slot at `(row, column)` to the next colour in the click
    /// cycle and returns the updated slot.
    ///
    /// # Errors
    ///
    /// Rejected with [`TurnError::GameFinished`] after the game ends,
    /// [`TurnError::RowNotActive`] for any row but the active one, and
    /// [`TurnError::ColumnOutOfBounds`] past the row width. Rejected
    /// commands leave the board untouched.
    #[instrument(skip(self))]
    pub fn cycle_slot(&mut self, row: usize, column: usize) -> Result<Slot, TurnError> {
        let Phase::Active(active) = self.phase else {
            warn!("cycle command after game end");
            return Err(TurnError::GameFinished);
        };
        if row != active {
            debug!(active, "cycle command on inactive row");
            return Err(TurnError::RowNotActive(row));
        }
        let Some(row_ref) = self.board.row_mut(row) else {
            return Err(TurnError::RowNotActive(row));
        };
        let Some(current) = row_ref.slot(column) else {
            return Err(TurnError::ColumnOutOfBounds(column));
        };

        let next = current.cycle(self.config.palette_size());
        row_ref.set_slot(column, next);
        debug!(?next, "slot cycled");
        Ok(next)
    }

    /// Scores the active row against the secret and advances the state
    /// machine.
    ///
    /// A fully exact guess wins; a miss on row zero loses; anything else
    /// closes the row and opens the one above it (indices count down as
    /// attempts are consumed).
    ///
    /// # Errors
    ///
    /// Rejected with [`TurnError::GameFinished`] after the game ends and
    /// [`TurnError::IncompleteRow`] while any slot is still empty; the
    /// board and outcome are unchanged on rejection.
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self) -> Result<Submission, TurnError> {
        let Phase::Active(row) = self.phase else {
            warn!("submit command after game end");
            return Err(TurnError::GameFinished);
        };
        let Some(guess) = self.board.row(row).and_then(|r| r.guess()) else {
            debug!(row, "incomplete row submitted");
            return Err(TurnError::IncompleteRow(row));
        };

        let feedback = rules::score(&self.secret, &guess);
        if let Some(row_ref) = self.board.row_mut(row) {
            row_ref.record_feedback(feedback);
            row_ref.deactivate();
        }

        let submission = if feedback.is_win() {
            info!(row, "guess matches the secret");
            self.phase = Phase::Won;
            Submission::Won { feedback }
        } else if row == 0 {
            info!("attempts exhausted");
            self.phase = Phase::Lost;
            Submission::Lost { feedback }
        } else {
            let next = row - 1;
            if let Some(row_ref) = self.board.row_mut(next) {
                row_ref.activate();
            }
            self.phase = Phase::Active(next);
            debug!(
                exact = feedback.exact(),
                colour = feedback.colour(),
                next,
                "row scored"
            );
            Submission::Continued {
                feedback,
                active_row: next,
            }
        };

        debug_assert!(
            MastermindInvariants::check_all(self).is_ok(),
            "session invariants violated after submission"
        );
        Ok(submission)
    }

    /// Starts the session over with a fresh board and a newly drawn secret.
    #[instrument(skip(self, rng))]
    pub fn reset(&mut self, rng: &mut impl Rng) {
        info!("resetting session");
        *self = Self::new(self.config, rng);
    }

    /// Test hook for corrupting state in invariant tests.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Result of a scored submission: the feedback plus the state transition it
/// caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Submission {
    /// Guess scored; the next row is open for input.
    Continued {
        /// Score for the submitted row.
        feedback: Feedback,
        /// Index of the newly opened row.
        active_row: usize,
    },
    /// Every slot matched the secret.
    Won {
        /// Score for the submitted row (always four exact).
        feedback: Feedback,
    },
    /// The final attempt is spent.
    Lost {
        /// Score for the submitted row.
        feedback: Feedback,
    },
}

impl Submission {
    /// Returns the feedback carried by this submission.
    pub fn feedback(&self) -> Feedback {
        match self {
            Submission::Continued { feedback, .. }
            | Submission::Won { feedback }
            | Submission::Lost { feedback } => *feedback,
        }
    }
}

/// Error raised when a command cannot be applied to the session.
///
/// Every variant is a recoverable input-validation condition; the session
/// state is unchanged and the caller re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// Submit was called while the active row still has empty slots.
    #[display("row {} is incomplete", _0)]
    IncompleteRow(usize),

    /// The game has already finished.
    #[display("game is already finished")]
    GameFinished,

    /// The targeted row is not open for input.
    #[display("row {} is not active", _0)]
    RowNotActive(usize),

    /// The column index is outside the row.
    #[display("column {} is out of bounds", _0)]
    ColumnOutOfBounds(usize),
}

impl std::error::Error for TurnError {}
