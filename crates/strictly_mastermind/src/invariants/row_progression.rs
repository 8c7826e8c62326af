//! Row progression invariant: attempts are consumed top index downward.

use super::Invariant;
use crate::board::GuessRow;
use crate::session::GameSession;
use crate::types::Slot;

/// Invariant: scored rows form a contiguous block at the high indices, the
/// active row sits directly beneath it, and rows that have never been open
/// are still blank.
pub struct RowProgressionInvariant;

fn untouched(row: &GuessRow) -> bool {
    row.feedback().is_none() && row.slots().iter().all(Slot::is_empty)
}

impl Invariant<GameSession> for RowProgressionInvariant {
    fn holds(session: &GameSession) -> bool {
        let rows = session.board().rows();
        let first_scored = rows
            .iter()
            .position(|row| row.feedback().is_some())
            .unwrap_or(rows.len());

        // Every row from the first scored one upward must be closed out.
        if rows[first_scored..]
            .iter()
            .any(|row| row.feedback().is_none() || row.is_active())
        {
            return false;
        }

        match session.active_row() {
            Some(active) => {
                active + 1 == first_scored && rows[..active].iter().all(untouched)
            }
            // A finished game scored at least one row.
            None => first_scored < rows.len() && rows[..first_scored].iter().all(untouched),
        }
    }

    fn description() -> &'static str {
        "rows are scored contiguously from the last index downward"
    }
}
