//! Terminal input module.
//!
//! Maps `crossterm` key events into the small command enums in
//! [`crate::types`], so the games never see physical key codes, and provides
//! the one-slot [`TurnBuffer`] the snake reads once per tick.

pub mod buffer;
pub mod map;

pub use tui_arcade_types as types;

pub use buffer::TurnBuffer;
pub use map::{should_quit, snake_command, tetris_command};
