//! Tetris game logic - pure, deterministic, and testable
//!
//! This crate contains the grid, the seven templates, the falling piece
//! rules and the scoring. It has **no dependencies** on the terminal or on
//! time, so every rule can be exercised from plain unit tests.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 settled-cell grid with row clearing
//! - [`templates`]: the seven shapes with their rotation origins and colors
//! - [`tetromino`]: move and rotate rules for the falling piece
//! - [`game_state`]: score, preview, landing and game over
//!
//! # Rules
//!
//! - Pieces spawn shifted by (5, -3), i.e. above the visible board
//! - Sideways moves into walls or settled cells are silently rejected
//! - A downward move that collides settles the piece; if any of its cells is
//!   still at row 0 or above the game is over
//! - Rotations are quarter turns about a fractional origin, all-or-nothing
//! - Score: +1 per soft-drop step, +1 per landed piece, +50 per cleared line
//!
//! # Example
//!
//! ```
//! use tui_arcade_tetris::{GameState, StepResult};
//! use tui_arcade_types::TetrisCommand;
//!
//! let mut game = GameState::with_seed(12345);
//! game.apply(TetrisCommand::MoveRight);
//! game.apply(TetrisCommand::RotateCw);
//! assert_eq!(game.apply(TetrisCommand::SoftDrop), StepResult::Continue);
//! assert_eq!(game.score(), 1);
//! ```

pub mod board;
pub mod game_state;
pub mod templates;
pub mod tetromino;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{GameState, StepResult};
pub use templates::{color_of, template, Template};
pub use tetromino::{MoveOutcome, Tetromino};
