//! First-class invariants for the mastermind session.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and serve as documentation of the
//! engine's guarantees.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state, so a whole
/// family can be verified in one step.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod row_progression;
pub mod secret_in_palette;
pub mod single_active_row;

pub use row_progression::RowProgressionInvariant;
pub use secret_in_palette::SecretInPaletteInvariant;
pub use single_active_row::SingleActiveRowInvariant;

/// All session invariants as a composable set.
pub type MastermindInvariants = (
    SingleActiveRowInvariant,
    RowProgressionInvariant,
    SecretInPaletteInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::session::GameSession;
    use crate::types::{Colour, Slot, ROW_LENGTH};

    fn playable_session() -> GameSession {
        GameSession::with_secret(
            GameConfig::default(),
            crate::secret::Secret::from_colours([Colour::Red; ROW_LENGTH]),
        )
    }

    fn fill_active_row(session: &mut GameSession, colour: Colour) {
        let row = session.active_row().expect("session is active");
        for column in 0..ROW_LENGTH {
            while session.cycle_slot(row, column) != Ok(Slot::Filled(colour)) {}
        }
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let session = playable_session();
        assert!(MastermindInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_submissions() {
        let mut session = playable_session();
        fill_active_row(&mut session, Colour::Green);
        session.submit_guess().expect("complete row");
        assert!(MastermindInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_violations() {
        let mut session = playable_session();
        // Open a second row and scribble on an unvisited one.
        if let Some(row) = session.board_mut().row_mut(3) {
            row.activate();
            row.set_slot(0, Slot::Filled(Colour::Blue));
        }

        let violations = MastermindInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = playable_session();

        type TwoInvariants = (SingleActiveRowInvariant, SecretInPaletteInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
