//! Snake game logic - pure, deterministic, and testable
//!
//! The snake lives on a toroidal board: leaving one edge re-enters from the
//! opposite one, so the only way to die is biting yourself, which resets the
//! game to a single segment.
//!
//! # Module Structure
//!
//! - [`board`]: board size, tick rate and wraparound stepping
//! - [`body`]: fixed-capacity segment ring with tail recycling
//! - [`game_state`]: heading, apple placement, stepping and reset
//!
//! # Example
//!
//! ```
//! use tui_arcade_snake::{SnakeConfig, SnakeGame, StepOutcome};
//! use tui_arcade_types::Direction;
//!
//! let mut game = SnakeGame::with_seed(SnakeConfig::default(), 42);
//! game.set_apple((10, 10));
//! assert_eq!(game.step(Some(Direction::Down)), StepOutcome::Moved);
//! assert_eq!(game.body().head(), (1, 1));
//! ```

pub mod board;
pub mod body;
pub mod game_state;

pub use tui_arcade_types as types;

pub use board::{Coords, SnakeConfig};
pub use body::Body;
pub use game_state::{MoveOutcome, SnakeGame, StepOutcome, START};
