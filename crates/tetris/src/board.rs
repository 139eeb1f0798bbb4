//! Board module - the settled-cell grid
//!
//! The board is a 10x20 grid where each cell is either empty or remembers the
//! template kind that settled there (the renderer recovers the color from it).
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Falling tetrominoes may sit above the board (negative y); those cells are never stored.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, TETRIS_HEIGHT, TETRIS_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (TETRIS_WIDTH as usize) * (TETRIS_HEIGHT as usize);

/// Upper bound on rows removed by a single clear pass
pub const MAX_CLEARED_ROWS: usize = TETRIS_HEIGHT as usize;

/// Rows removed by [`Board::clear_full_rows`], in the order they were removed
pub type ClearedRows = ArrayVec<usize, MAX_CLEARED_ROWS>;

/// The settled grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= TETRIS_WIDTH || y < 0 || y >= TETRIS_HEIGHT {
            return None;
        }
        Some((y as usize) * (TETRIS_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i8 {
        TETRIS_WIDTH
    }

    pub fn height(&self) -> i8 {
        TETRIS_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a column index lies within the board
    pub fn contains_x(&self, x: i8) -> bool {
        (0..TETRIS_WIDTH).contains(&x)
    }

    /// Check if a row has no empty cell left
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= TETRIS_HEIGHT as usize {
            return false;
        }
        let start = y * TETRIS_WIDTH as usize;
        let end = start + TETRIS_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Cells of a single row, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = TETRIS_WIDTH as usize;
        let start = y.min(TETRIS_HEIGHT as usize - 1) * width;
        &self.cells[start..start + width]
    }

    /// Remove a row: every row above moves down by one and the top row empties
    pub fn clear_row(&mut self, y: usize) {
        if y >= TETRIS_HEIGHT as usize {
            return;
        }

        let width = TETRIS_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells.copy_within(src_start..src_start + width, dst_start);
        }

        self.cells[..width].fill(None);
    }

    /// Remove every complete row, scanning from the bottom up
    ///
    /// After a row is removed the same index is checked again, since it now
    /// holds the row that used to sit above it. Returns the removed indices in
    /// removal order (the same index appears twice when two stacked rows go).
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = TETRIS_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                // every removal consumes one full row, so this never overflows
                let _ = cleared.try_push(row);
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Write four tetromino cells into the grid
    /// Returns false (and writes nothing) if any cell lies outside the board
    pub fn lock(&mut self, cells: &[(i8, i8); 4], kind: PieceKind) -> bool {
        if cells.iter().any(|&(x, y)| Self::index(x, y).is_none()) {
            return false;
        }

        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
