//! Snake movement, growth, apple placement and self-collision

use tui_arcade::snake::{Coords, MoveOutcome, SnakeConfig, SnakeGame, StepOutcome, START};
use tui_arcade::types::Direction;

const DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
];

fn segments(game: &SnakeGame) -> Vec<Coords> {
    game.body().iter().collect()
}

/// A straight horizontal snake with its head at `head`, tail to the left
fn straight(cfg: SnakeConfig, head: Coords, len: i16) -> Vec<Coords> {
    (0..len)
        .map(|i| ((head.0 - i).rem_euclid(cfg.width), head.1))
        .collect()
}

#[test]
fn test_move_adds_one_adjacent_head_and_keeps_length() {
    let cfg = SnakeConfig::default();
    for dir in DIRECTIONS {
        for seed in 0..10 {
            let body = straight(cfg, (10, 10), 4);
            let mut game = SnakeGame::with_body(cfg, &body, Direction::Right, seed);
            // keep the apple out of the way
            game.set_apple((0, 19));
            let old_head = game.body().head();

            assert_eq!(game.move_snake(dir), MoveOutcome::Moved);

            assert_eq!(game.body().head(), cfg.wrap_step(old_head, dir));
            assert_eq!(game.body().len(), 4);
            // the rest of the body is the old body minus its tail
            assert_eq!(&segments(&game)[1..], &body[..3]);
        }
    }
}

#[test]
fn test_eating_grows_by_exactly_one() {
    let cfg = SnakeConfig::default();
    for dir in [Direction::Right, Direction::Up, Direction::Down] {
        let body = straight(cfg, (10, 10), 3);
        let mut game = SnakeGame::with_body(cfg, &body, Direction::Right, 3);
        let target = cfg.wrap_step(game.body().head(), dir);
        game.set_apple(target);

        assert_eq!(game.move_snake(dir), MoveOutcome::Ate);

        let mut expected = vec![target];
        expected.extend_from_slice(&body);
        assert_eq!(segments(&game), expected);
        assert!(!game.body().contains(game.apple()));
    }
}

#[test]
fn test_wraparound_on_every_edge() {
    let cfg = SnakeConfig::new(20, 20);
    let cases = [
        ((19, 7), Direction::Right, (0, 7)),
        ((0, 7), Direction::Left, (19, 7)),
        ((7, 0), Direction::Up, (7, 19)),
        ((7, 19), Direction::Down, (7, 0)),
    ];

    for (start, dir, expected) in cases {
        let mut game = SnakeGame::with_body(cfg, &[start], dir, 11);
        game.set_apple((12, 12));
        assert_eq!(game.step(None), StepOutcome::Moved);
        assert_eq!(game.body().head(), expected, "{:?} from {:?}", dir, start);
    }
}

#[test]
fn test_apple_never_placed_on_body_exhaustive_small_board() {
    let cfg = SnakeConfig::new(3, 3);
    let tiles: Vec<Coords> = cfg.tiles().collect();

    for mask in 1u32..(1 << tiles.len()) - 1 {
        let body: Vec<Coords> = tiles
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &t)| t)
            .collect();

        for seed in 0..3 {
            let game = SnakeGame::with_body(cfg, &body, Direction::Right, seed);
            assert!(
                !game.body().contains(game.apple()),
                "apple {:?} on body {:?}",
                game.apple(),
                body
            );
        }
    }
}

#[test]
fn test_relocation_after_eating_avoids_body_exhaustive_small_board() {
    let cfg = SnakeConfig::new(3, 3);
    let tiles: Vec<Coords> = cfg.tiles().collect();

    for mask in 1u32..(1 << tiles.len()) {
        let body: Vec<Coords> = tiles
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &t)| t)
            .collect();
        // leave room for the new head plus at least one free tile
        if body.len() > 7 {
            continue;
        }

        let mut game = SnakeGame::with_body(cfg, &body, Direction::Right, 5);
        let target = cfg.wrap_step(game.body().head(), Direction::Right);
        if body.contains(&target) {
            continue;
        }
        game.set_apple(target);

        assert_eq!(game.move_snake(Direction::Right), MoveOutcome::Ate);
        assert_eq!(game.body().len(), body.len() + 1);
        assert!(!game.body().contains(game.apple()));
    }
}

#[test]
fn test_filling_the_board_resets() {
    let cfg = SnakeConfig::new(3, 1);
    let mut game = SnakeGame::with_body(cfg, &[(1, 0), (0, 0)], Direction::Right, 2);
    assert_eq!(game.apple(), (2, 0));

    assert_eq!(game.move_snake(Direction::Right), MoveOutcome::Filled);

    assert_eq!(segments(&game), vec![START]);
    assert_eq!(game.resets(), 1);
}

#[test]
fn test_step_reports_a_filled_board() {
    let cfg = SnakeConfig::new(2, 2);
    let mut game = SnakeGame::with_body(cfg, &[(0, 1), (0, 0), (1, 0)], Direction::Right, 3);
    assert_eq!(game.apple(), (1, 1));

    assert_eq!(game.step(None), StepOutcome::Filled);

    assert_eq!(game.body().len(), 1);
    assert_eq!(game.body().head(), START);
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.resets(), 1);
    assert!(!game.body().contains(game.apple()));
}

#[test]
fn test_self_collision_resets_game() {
    let cfg = SnakeConfig::default();
    // head at (2, 1) travelling up, body curls round to (1, 0)
    let body = [(2, 1), (2, 2), (1, 2), (1, 1), (1, 0)];
    let mut game = SnakeGame::with_body(cfg, &body, Direction::Up, 4);
    game.set_apple((15, 15));

    assert_eq!(game.step(Some(Direction::Left)), StepOutcome::Collided);

    assert_eq!(game.body().len(), 1);
    assert_eq!(game.body().head(), (1, 0));
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.resets(), 1);
    assert!(!game.body().contains(game.apple()));
}

#[test]
fn test_following_own_tail_is_not_a_collision() {
    let cfg = SnakeConfig::default();
    // a 2x2 loop: the head steps into the tile the tail is leaving
    let body = [(2, 1), (2, 2), (1, 2), (1, 1)];
    let mut game = SnakeGame::with_body(cfg, &body, Direction::Up, 4);
    game.set_apple((15, 15));

    assert_eq!(game.step(Some(Direction::Left)), StepOutcome::Moved);
    assert_eq!(game.body().len(), 4);
    assert_eq!(game.body().head(), (1, 1));
}

#[test]
fn test_reversal_in_buffer_is_ignored() {
    let mut game = SnakeGame::with_seed(SnakeConfig::default(), 8);
    game.set_apple((10, 10));

    assert_eq!(game.step(Some(Direction::Left)), StepOutcome::Moved);

    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.body().head(), (2, 0));
}
