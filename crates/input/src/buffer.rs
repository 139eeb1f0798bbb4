//! One-slot buffer for the snake's next turn.

use crate::types::Direction;

/// Holds the freshest requested direction until the next simulation step
///
/// Several key presses within one tick overwrite each other; only the last
/// one is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnBuffer {
    pending: Option<Direction>,
}

impl TurnBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dir: Direction) {
        self.pending = Some(dir);
    }

    /// Consume the pending turn, leaving the slot empty
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn peek(&self) -> Option<Direction> {
        self.pending
    }
}
