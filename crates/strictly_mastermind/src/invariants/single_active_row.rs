//! Single active row invariant: at most one row accepts input.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: the board has exactly one active row while play continues,
/// matching the session's phase, and none once the game ends.
pub struct SingleActiveRowInvariant;

impl Invariant<GameSession> for SingleActiveRowInvariant {
    fn holds(session: &GameSession) -> bool {
        let active: Vec<usize> = session
            .board()
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_active())
            .map(|(index, _)| index)
            .collect();

        match session.active_row() {
            Some(index) => active == [index],
            None => active.is_empty(),
        }
    }

    fn description() -> &'static str {
        "exactly one row is active while play continues, matching the phase"
    }
}
