//! Running / Paused / Quit state machine for the frame loop.

/// Top-level loop state
///
/// Paused freezes simulation steps while events and rendering continue.
/// Quit is terminal: nothing leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Paused,
    Quit,
}

impl LoopState {
    pub fn toggle_pause(&mut self) {
        *self = match *self {
            LoopState::Running => LoopState::Paused,
            LoopState::Paused => LoopState::Running,
            LoopState::Quit => LoopState::Quit,
        };
    }

    pub fn quit(&mut self) {
        *self = LoopState::Quit;
    }

    /// Whether simulation steps may run
    pub fn is_running(&self) -> bool {
        *self == LoopState::Running
    }

    pub fn is_paused(&self) -> bool {
        *self == LoopState::Paused
    }

    pub fn is_quit(&self) -> bool {
        *self == LoopState::Quit
    }
}
