//! Shared types module - plain data structures and constants
//!
//! Everything in here is pure data with no I/O, so it can be used by the
//! simulation crates, the input maps and the terminal views alike.
//!
//! # Boards
//!
//! | Game | Width | Height | Notes |
//! |------|-------|--------|-------|
//! | Snake | 20 | 20 | toroidal, edges wrap |
//! | Tetris | 10 | 20 | spawn offset (5, -3) |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SNAKE_TICKS_PER_SECOND` | 20 | Snake simulation rate |
//! | `TETRIS_FALL_MS` | 500 | Tetris automatic fall interval (10000 / rows) |
//! | `FRAME_MS` | 16 | Render/poll cadence (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Direction, PieceKind, TETRIS_WIDTH, TETRIS_HEIGHT};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(PieceKind::from_index(6), Some(PieceKind::O));
//! assert_eq!(TETRIS_WIDTH, 10);
//! assert_eq!(TETRIS_HEIGHT, 20);
//! ```

/// Snake board width in tiles
pub const SNAKE_WIDTH: i16 = 20;

/// Snake board height in tiles
pub const SNAKE_HEIGHT: i16 = 20;

/// Snake simulation steps per second
pub const SNAKE_TICKS_PER_SECOND: u32 = 20;

/// Tetris board width in cells (10 columns)
pub const TETRIS_WIDTH: i8 = 10;

/// Tetris board height in cells (20 rows)
pub const TETRIS_HEIGHT: i8 = 20;

/// Automatic fall interval in milliseconds (10000ms spread over the rows)
pub const TETRIS_FALL_MS: u64 = 10_000 / TETRIS_HEIGHT as u64;

/// Horizontal spawn offset applied to a fresh template
pub const SPAWN_DX: i8 = TETRIS_WIDTH / 2;

/// Vertical spawn offset applied to a fresh template (starts above the board)
pub const SPAWN_DY: i8 = -3;

/// Points for each successful soft-drop step
pub const SOFT_DROP_SCORE: u32 = 1;

/// Points for each landed tetromino
pub const LANDING_SCORE: u32 = 1;

/// Points per cleared line
pub const LINE_CLEAR_SCORE: u32 = 50;

/// Frame cadence in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Heading of the snake
///
/// The declaration order matches the classic Right → Up → Left → Down cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// The 180° reversal of this direction
    ///
    /// ```
    /// use tui_arcade_types::Direction;
    ///
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit offset in screen coordinates (y grows downwards)
    pub fn offset(&self) -> (i16, i16) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Snake commands resolved from key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    Pause,
    Quit,
}

/// Tetris commands resolved from key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisCommand {
    /// Shift one column left
    MoveLeft,
    /// Shift one column right
    MoveRight,
    /// Move one row down (scores a point when it succeeds)
    SoftDrop,
    /// Quarter turn, direction +1
    RotateCw,
    /// Quarter turn, direction -1
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Leave the game
    Quit,
}

/// The seven tetromino templates
///
/// Declaration order is the template index: the grid stores a kind per cell
/// and the renderer looks the color up from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    S,
    T,
    Z,
    O,
}

impl PieceKind {
    /// Every kind, in template index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::O,
    ];

    /// Template index of this kind
    ///
    /// ```
    /// use tui_arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.index(), 0);
    /// assert_eq!(PieceKind::O.index(), 6);
    /// ```
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::S => 3,
            PieceKind::T => 4,
            PieceKind::Z => 5,
            PieceKind::O => 6,
        }
    }

    /// Look a kind up by template index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A cell on the tetris grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Settled cell placed by the given template
pub type Cell = Option<PieceKind>;
