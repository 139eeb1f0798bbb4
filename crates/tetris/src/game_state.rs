//! Game state module - the complete Tetris state
//!
//! Ties the board, the active tetromino, the preview kind and the score
//! together. The loop drives it with [`GameState::apply`] for key commands and
//! [`GameState::tick`] for the timed fall; it has no notion of time itself.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::tetromino::{MoveOutcome, Tetromino};
use crate::types::{
    PieceKind, TetrisCommand, LANDING_SCORE, LINE_CLEAR_SCORE, SOFT_DROP_SCORE, SPAWN_DX, SPAWN_DY,
};

/// What a downward step (or a command) did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Still falling; the command moved the piece or was rejected
    Continue,
    /// The piece settled and the next one spawned
    Landed { lines: u32 },
    /// Topped out; terminal state
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    score: u32,
    lines: u32,
    landed: u32,
    game_over: bool,
    rng: StdRng,
}

impl GameState {
    /// Create a new game drawing pieces from `rng`
    pub fn new(mut rng: StdRng) -> Self {
        let current = random_kind(&mut rng);
        let next = random_kind(&mut rng);

        let mut state = Self {
            board: Board::new(),
            active: Tetromino::from_template(current),
            next,
            score: 0,
            lines: 0,
            landed: 0,
            game_over: false,
            rng,
        };
        state.spawn(current);
        state
    }

    /// Create a new game with a deterministic piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a new game seeded from the OS
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    /// Kind shown in the preview, spawned after the next landing
    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Number of tetrominoes settled so far
    pub fn landed(&self) -> u32 {
        self.landed
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Replace the active piece with a fresh `kind` at the standard spawn offset
    pub fn spawn(&mut self, kind: PieceKind) {
        self.spawn_at(kind, SPAWN_DX);
    }

    /// Replace the active piece with a fresh `kind` shifted to `column`
    pub fn spawn_at(&mut self, kind: PieceKind, column: i8) {
        self.active = Tetromino::from_template(kind);
        self.active.try_move(column, SPAWN_DY, &self.board);
    }

    /// Shift the active piece without any landing bookkeeping
    pub fn try_move(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        self.active.try_move(dx, dy, &self.board)
    }

    /// Quarter-turn the active piece; false when the turn was rejected
    pub fn rotate(&mut self, direction: i8) -> bool {
        self.active.try_rotate(direction, &self.board)
    }

    /// Move one row down, settling the piece when it can't
    pub fn soft_drop(&mut self) -> StepResult {
        if self.game_over {
            return StepResult::GameOver;
        }

        match self.try_move(0, 1) {
            MoveOutcome::Moved => {
                self.score += SOFT_DROP_SCORE;
                debug!("score: {}", self.score);
                StepResult::Continue
            }
            MoveOutcome::Blocked => StepResult::Continue,
            MoveOutcome::Landed => self.settle(),
            MoveOutcome::GameOver => {
                self.game_over = true;
                info!("game over, final score {}", self.score);
                StepResult::GameOver
            }
        }
    }

    /// Timed fall step
    pub fn tick(&mut self) -> StepResult {
        self.soft_drop()
    }

    /// Apply a key command immediately
    pub fn apply(&mut self, command: TetrisCommand) -> StepResult {
        if self.game_over {
            return StepResult::GameOver;
        }

        match command {
            TetrisCommand::MoveLeft => {
                self.try_move(-1, 0);
                StepResult::Continue
            }
            TetrisCommand::MoveRight => {
                self.try_move(1, 0);
                StepResult::Continue
            }
            TetrisCommand::SoftDrop => self.soft_drop(),
            TetrisCommand::RotateCw => {
                self.rotate(1);
                StepResult::Continue
            }
            TetrisCommand::RotateCcw => {
                self.rotate(-1);
                StepResult::Continue
            }
            // loop-level commands
            TetrisCommand::Pause | TetrisCommand::Quit => StepResult::Continue,
        }
    }

    /// Copy the active cells into the grid, clear lines and spawn the preview
    ///
    /// A piece that can't be written into the grid ends the game without
    /// scoring.
    fn settle(&mut self) -> StepResult {
        let kind = self.active.kind;
        if !self.board.lock(&self.active.cells, kind) {
            self.game_over = true;
            info!("{:?} could not be locked, game over at {}", kind, self.score);
            return StepResult::GameOver;
        }
        self.landed += 1;
        self.score += LANDING_SCORE;

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.lines += cleared;
            self.score += LINE_CLEAR_SCORE * cleared;
            info!("cleared {} line(s)", cleared);
        }
        info!("score: {}", self.score);

        let next = self.next;
        self.next = random_kind(&mut self.rng);
        self.spawn(next);

        StepResult::Landed { lines: cleared }
    }
}

fn random_kind(rng: &mut StdRng) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TETRIS_HEIGHT;

    #[test]
    fn test_new_game_spawns_above_board() {
        let state = GameState::with_seed(7);
        assert!(state.active().cells.iter().all(|&(_, y)| y < 0));
        assert!(state.active().cells.iter().any(|&(x, _)| x >= SPAWN_DX));
        assert_eq!(state.score(), 0);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_soft_drop_scores_one_point() {
        let mut state = GameState::with_seed(7);
        assert_eq!(state.soft_drop(), StepResult::Continue);
        assert_eq!(state.score(), SOFT_DROP_SCORE);
    }

    #[test]
    fn test_landing_spawns_preview_kind() {
        let mut state = GameState::with_seed(3);
        let preview = state.next();

        let mut steps = 0;
        let result = loop {
            let r = state.tick();
            if r != StepResult::Continue {
                break r;
            }
            steps += 1;
            assert!(steps < 2 * TETRIS_HEIGHT as i32, "piece never landed");
        };

        assert_eq!(result, StepResult::Landed { lines: 0 });
        assert_eq!(state.active().kind, preview);
        assert_eq!(state.landed(), 1);
        assert_eq!(state.score(), steps as u32 * SOFT_DROP_SCORE + LANDING_SCORE);
    }

    #[test]
    fn test_commands_after_game_over_are_ignored() {
        let mut state = GameState::with_seed(1);
        state.game_over = true;
        assert_eq!(state.apply(TetrisCommand::MoveLeft), StepResult::GameOver);
        assert_eq!(state.tick(), StepResult::GameOver);
    }

    #[test]
    fn test_failed_lock_ends_game_without_scoring() {
        let mut state = GameState::with_seed(11);
        state.spawn_at(PieceKind::O, 4);
        let score = state.score();

        // still partly above the board, so the grid can't take it
        assert_eq!(state.settle(), StepResult::GameOver);

        assert!(state.is_game_over());
        assert_eq!(state.score(), score);
        assert_eq!(state.landed(), 0);
        assert!(state.board().cells().iter().all(|c| c.is_none()));
        assert_eq!(state.soft_drop(), StepResult::GameOver);
    }
}
