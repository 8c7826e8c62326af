//! Guess rows and the board that holds them.

use crate::types::{Colour, Feedback, Slot, ROW_LENGTH};
use serde::{Deserialize, Serialize};

/// One guess attempt: four slots, an input flag, and the score once the
/// row has been submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRow {
    slots: [Slot; ROW_LENGTH],
    active: bool,
    feedback: Option<Feedback>,
}

impl GuessRow {
    pub(crate) fn new() -> Self {
        Self {
            slots: [Slot::Empty; ROW_LENGTH],
            active: false,
            feedback: None,
        }
    }

    /// Returns all slots in the row.
    pub fn slots(&self) -> &[Slot; ROW_LENGTH] {
        &self.slots
    }

    /// Returns the slot at the given column.
    pub fn slot(&self, column: usize) -> Option<Slot> {
        self.slots.get(column).copied()
    }

    /// Checks whether the row is open for input.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the recorded score, once the row has been submitted.
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Checks whether every slot holds a colour.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Returns the row's colours if every slot is filled.
    pub fn guess(&self) -> Option<[Colour; ROW_LENGTH]> {
        let mut colours = [Colour::ALL[0]; ROW_LENGTH];
        for (colour, slot) in colours.iter_mut().zip(&self.slots) {
            *colour = slot.colour()?;
        }
        Some(colours)
    }

    pub(crate) fn set_slot(&mut self, column: usize, slot: Slot) {
        if let Some(target) = self.slots.get_mut(column) {
            *target = slot;
        }
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    pub(crate) fn record_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }
}

/// The stack of guess rows for one session.
///
/// Attempts are consumed from the last index down to zero, mirroring the
/// bottom-up board layout players see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<GuessRow>,
}

impl Board {
    pub(crate) fn new(attempt_limit: usize) -> Self {
        Self {
            rows: (0..attempt_limit).map(|_| GuessRow::new()).collect(),
        }
    }

    /// Returns all rows, index 0 first.
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Returns the row at the given index.
    pub fn row(&self, index: usize) -> Option<&GuessRow> {
        self.rows.get(index)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut GuessRow> {
        self.rows.get_mut(index)
    }
}
