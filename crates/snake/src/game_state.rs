//! Game state module - the complete Snake state
//!
//! Holds the body ring, the heading, the apple and the RNG used to place it.
//! The loop calls [`SnakeGame::step`] once per tick with the buffered turn.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::body::Body;
use crate::board::{Coords, SnakeConfig};
use crate::types::Direction;

/// Where a fresh snake starts
pub const START: Coords = (1, 0);

/// Random draws tried before falling back to scanning the free tiles
const APPLE_ATTEMPTS_PER_TILE: usize = 4;

/// Result of [`SnakeGame::move_snake`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The new head landed on the apple; the body grew by one
    Ate,
    /// The apple was eaten on the last free tile and the game was reset
    Filled,
}

/// Result of one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate,
    /// The head ran into the body and the game was reset
    Collided,
    /// The body covered the whole board and the game was reset
    Filled,
}

#[derive(Debug, Clone)]
pub struct SnakeGame {
    config: SnakeConfig,
    body: Body,
    direction: Direction,
    apple: Coords,
    resets: u32,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new(config: SnakeConfig, rng: StdRng) -> Self {
        let mut game = Self {
            config,
            body: Body::new(config.capacity(), START),
            direction: Direction::Right,
            apple: START,
            resets: 0,
            rng,
        };
        game.reset();
        game.resets = 0;
        game
    }

    pub fn with_seed(config: SnakeConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: SnakeConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }

    /// A game with a prepared body (head first) and heading
    pub fn with_body(config: SnakeConfig, segments: &[Coords], direction: Direction, seed: u64) -> Self {
        let mut game = Self::with_seed(config, seed);
        game.body = Body::from_segments(config.capacity(), segments);
        game.direction = direction;
        if game.body.contains(game.apple) {
            game.relocate_apple();
        }
        game
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn apple(&self) -> Coords {
        self.apple
    }

    /// Move the apple to a specific tile
    pub fn set_apple(&mut self, pos: Coords) {
        self.apple = pos;
    }

    /// How many times the snake has been reset since the game started
    pub fn resets(&self) -> u32 {
        self.resets
    }

    /// Change heading; a 180° reversal is rejected
    pub fn turn(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Advance one tile towards `dir` (wrapping at the edges)
    ///
    /// The tail record becomes the new head; eating the apple keeps the old
    /// tail tile as an extra segment and relocates the apple. Eating the last
    /// free tile resets the game.
    pub fn move_snake(&mut self, dir: Direction) -> MoveOutcome {
        let new_head = self.config.wrap_step(self.body.head(), dir);
        let ate = new_head == self.apple;

        self.body.advance(new_head, ate);

        if ate {
            debug!("apple eaten at {:?}, length {}", new_head, self.body.len());
            if !self.relocate_apple() {
                info!("board filled at length {}, resetting", self.body.len());
                self.reset();
                return MoveOutcome::Filled;
            }
            return MoveOutcome::Ate;
        }
        MoveOutcome::Moved
    }

    /// One tick: apply the buffered turn, move, then check the head against the body
    pub fn step(&mut self, turn: Option<Direction>) -> StepOutcome {
        if let Some(dir) = turn {
            self.turn(dir);
        }

        let outcome = self.move_snake(self.direction);

        if self.body.head_overlaps_body() {
            info!("snake bit itself at length {}, resetting", self.body.len());
            self.reset();
            return StepOutcome::Collided;
        }

        match outcome {
            MoveOutcome::Moved => StepOutcome::Moved,
            MoveOutcome::Ate => StepOutcome::Ate,
            MoveOutcome::Filled => StepOutcome::Filled,
        }
    }

    /// Single segment at (1, 0) heading right, apple relocated
    pub fn reset(&mut self) {
        self.body.reset(START);
        self.direction = Direction::Right;
        self.resets += 1;
        self.relocate_apple();
    }

    /// Put the apple on a random free tile; false when no tile is free
    fn relocate_apple(&mut self) -> bool {
        match self.free_tile() {
            Some(pos) => {
                self.apple = pos;
                true
            }
            None => false,
        }
    }

    /// Uniform pick among tiles not covered by the body
    ///
    /// Rejection sampling first; a crowded board falls back to an explicit scan
    /// so this always terminates.
    fn free_tile(&mut self) -> Option<Coords> {
        let attempts = self.config.capacity() * APPLE_ATTEMPTS_PER_TILE;
        for _ in 0..attempts {
            let pos = (
                self.rng.gen_range(0..self.config.width),
                self.rng.gen_range(0..self.config.height),
            );
            if !self.body.contains(pos) {
                return Some(pos);
            }
        }

        let free: Vec<Coords> = self
            .config
            .tiles()
            .filter(|&pos| !self.body.contains(pos))
            .collect();
        free.choose(&mut self.rng).copied()
    }
}
