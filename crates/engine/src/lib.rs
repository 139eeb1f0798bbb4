//! Loop plumbing shared by both games.
//!
//! Both programs run the same single-threaded frame loop: poll input, run at
//! most one fixed-interval simulation step, render. This crate holds the pieces
//! of that loop that carry no game rules: a monotonic clock, the fixed-step
//! [`Ticker`] and the Running/Paused/Quit [`LoopState`] machine.

pub mod clock;
pub mod loop_state;
pub mod ticker;

pub use clock::Clock;
pub use loop_state::LoopState;
pub use ticker::Ticker;
