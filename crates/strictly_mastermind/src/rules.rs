//! Guess scoring rules.

use crate::secret::Secret;
use crate::types::{Colour, Feedback, ROW_LENGTH};
use tracing::instrument;

/// Scores a guess against the secret.
///
/// Two passes over working copies: exact hits first, then colour-only hits
/// against whatever the first pass left behind. Matched entries are
/// consumed by replacing them with `None`, so duplicate colours can never
/// claim the same secret slot twice and `exact + colour` never exceeds the
/// row length.
// The secret stays out of the span fields.
#[instrument(skip(secret))]
pub fn score(secret: &Secret, guess: &[Colour; ROW_LENGTH]) -> Feedback {
    let mut secret_left: [Option<Colour>; ROW_LENGTH] = secret.colours().map(Some);
    let mut guess_left: [Option<Colour>; ROW_LENGTH] = guess.map(Some);

    let mut exact = 0;
    let mut colour = 0;

    // Exact hits consume both sides.
    for position in 0..ROW_LENGTH {
        if guess[position] == secret.colours()[position] {
            exact += 1;
            secret_left[position] = None;
            guess_left[position] = None;
        }
    }

    // Colour-only hits consume the secret side; each guess slot counts at
    // most once in total.
    for candidate in guess_left.into_iter().flatten() {
        if let Some(slot) = secret_left.iter_mut().find(|slot| **slot == Some(candidate)) {
            *slot = None;
            colour += 1;
        }
    }

    Feedback::new(exact, colour)
}
