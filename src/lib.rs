//! Terminal arcade (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binaries, the
//! integration tests and the benches share one import path
//! (`tui_arcade::{snake, tetris, engine, input, term, types}`).

pub mod logging;

pub use tui_arcade_engine as engine;
pub use tui_arcade_input as input;
pub use tui_arcade_snake as snake;
pub use tui_arcade_term as term;
pub use tui_arcade_tetris as tetris;
pub use tui_arcade_types as types;
