//! Board geometry for the toroidal snake field.

use crate::types::{Direction, SNAKE_HEIGHT, SNAKE_TICKS_PER_SECOND, SNAKE_WIDTH};

/// Tile coordinates `(x, y)`, origin top-left
pub type Coords = (i16, i16);

/// Board size and simulation rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeConfig {
    pub width: i16,
    pub height: i16,
    pub ticks_per_second: u32,
}

impl SnakeConfig {
    /// A board of `width` x `height` tiles at the default rate
    ///
    /// Dimensions are clamped to at least one tile.
    pub fn new(width: i16, height: i16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            ticks_per_second: SNAKE_TICKS_PER_SECOND,
        }
    }

    /// Number of tiles on the board
    pub fn capacity(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Milliseconds between simulation steps
    pub fn step_interval_ms(&self) -> u64 {
        1000 / self.ticks_per_second.max(1) as u64
    }

    pub fn contains(&self, (x, y): Coords) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// One tile from `from` towards `dir`, wrapping at every edge
    pub fn wrap_step(&self, from: Coords, dir: Direction) -> Coords {
        let (dx, dy) = dir.offset();
        (
            (from.0 + dx).rem_euclid(self.width),
            (from.1 + dy).rem_euclid(self.height),
        )
    }

    /// Every tile, row by row
    pub fn tiles(&self) -> impl Iterator<Item = Coords> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self::new(SNAKE_WIDTH, SNAKE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_step_at_every_edge() {
        let cfg = SnakeConfig::new(20, 20);
        assert_eq!(cfg.wrap_step((19, 5), Direction::Right), (0, 5));
        assert_eq!(cfg.wrap_step((0, 5), Direction::Left), (19, 5));
        assert_eq!(cfg.wrap_step((5, 0), Direction::Up), (5, 19));
        assert_eq!(cfg.wrap_step((5, 19), Direction::Down), (5, 0));
        assert_eq!(cfg.wrap_step((5, 5), Direction::Down), (5, 6));
    }

    #[test]
    fn default_interval_is_fifty_ms() {
        assert_eq!(SnakeConfig::default().step_interval_ms(), 50);
        assert_eq!(SnakeConfig::default().capacity(), 400);
    }

    #[test]
    fn tiles_cover_board_once() {
        let cfg = SnakeConfig::new(3, 2);
        let tiles: Vec<Coords> = cfg.tiles().collect();
        assert_eq!(tiles.len(), 6);
        assert!(tiles.iter().all(|&t| cfg.contains(t)));
    }
}
