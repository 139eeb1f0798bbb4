//! Terminal rendering for both games.
//!
//! Views draw game state into a framebuffer of styled cells (pure, testable);
//! [`TerminalRenderer`] flushes that framebuffer to the real terminal,
//! emitting only what changed since the previous frame.
//!
//! A game tile is a small rectangle of terminal cells (2x1 by default), so
//! "fill a rectangle with a color" is all either game needs from the surface.

pub mod fb;
pub mod layout;
pub mod renderer;
pub mod snake_view;
pub mod tetris_view;
pub mod texture;

pub use tui_arcade_snake as snake;
pub use tui_arcade_tetris as tetris;
pub use tui_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use layout::{BoardLayout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use snake_view::SnakeView;
pub use tetris_view::TetrisView;
pub use texture::{HeadTexture, HEAD_TEXTURE_PATH};
