//! Tetromino module - the falling piece and its move/rotate rules
//!
//! A tetromino is a template instance placed on the board: four absolute
//! cells, a fractional rotation origin that travels with it, and a color.
//! Moves and rotations are all-or-nothing: candidate cells are computed and
//! checked first, and the piece is only overwritten when every check passes.

use crate::board::Board;
use crate::templates::template;
use crate::types::{PieceKind, Rgb};

/// Result of [`Tetromino::try_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved; cells and origin were updated
    Moved,
    /// Out of x-bounds, or a sideways move into a settled cell; nothing changed
    Blocked,
    /// A downward move hit the floor or a settled cell; nothing changed
    Landed,
    /// Landed while part of the piece was still at or above row 0
    GameOver,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub origin: (f32, f32),
    pub color: Rgb,
    pub cells: [(i8, i8); 4],
}

impl Tetromino {
    /// Instantiate a template at the board's top-left corner
    pub fn from_template(kind: PieceKind) -> Self {
        let t = template(kind);
        Self {
            kind,
            origin: t.origin,
            color: t.color,
            cells: t.cells,
        }
    }

    /// Try to shift the piece by (dx, dy)
    ///
    /// Candidate cells above the board (y < 0) are not checked for
    /// occupancy. A sideways collision is silently rejected; a downward one
    /// reports a landing, or game over when a candidate is still at y <= 0.
    pub fn try_move(&mut self, dx: i8, dy: i8, board: &Board) -> MoveOutcome {
        let candidates = self.cells.map(|(x, y)| (x + dx, y + dy));

        if candidates.iter().any(|&(x, _)| !board.contains_x(x)) {
            return MoveOutcome::Blocked;
        }

        let collided = candidates
            .iter()
            .any(|&(x, y)| y >= board.height() || board.is_occupied(x, y));

        if collided {
            if dx != 0 {
                return MoveOutcome::Blocked;
            }
            if candidates.iter().any(|&(_, y)| y <= 0) {
                return MoveOutcome::GameOver;
            }
            return MoveOutcome::Landed;
        }

        self.cells = candidates;
        self.origin.0 += dx as f32;
        self.origin.1 += dy as f32;
        MoveOutcome::Moved
    }

    /// Cells after a quarter turn about the origin (`direction` is +1 or -1)
    pub fn rotated_cells(&self, direction: i8) -> [(i8, i8); 4] {
        let d = direction as f32;
        let (ox, oy) = self.origin;
        self.cells.map(|(x, y)| {
            let nx = ox + d * oy - d * y as f32;
            let ny = oy - d * ox + d * x as f32;
            (nx.round() as i8, ny.round() as i8)
        })
    }

    /// Try a quarter turn; returns false and leaves the piece untouched when
    /// any rotated cell is occupied, outside the columns, or below the floor.
    ///
    /// Cells above the top row are allowed so pieces can turn while spawning.
    pub fn try_rotate(&mut self, direction: i8, board: &Board) -> bool {
        let rotated = self.rotated_cells(direction);

        let blocked = rotated.iter().any(|&(x, y)| {
            !board.contains_x(x) || y >= board.height() || board.is_occupied(x, y)
        });
        if blocked {
            return false;
        }

        self.cells = rotated;
        true
    }
}
