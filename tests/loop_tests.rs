//! Frame loop plumbing driven with a simulated clock

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_arcade::engine::{LoopState, Ticker};
use tui_arcade::input::{snake_command, tetris_command, TurnBuffer};
use tui_arcade::snake::{SnakeConfig, SnakeGame};
use tui_arcade::tetris::GameState;
use tui_arcade::types::{Direction, SnakeCommand, TetrisCommand, TETRIS_FALL_MS};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// One frame of the snake loop at `now_ms`, with the keys pressed during it
fn snake_frame(
    game: &mut SnakeGame,
    turns: &mut TurnBuffer,
    state: &mut LoopState,
    ticker: &mut Ticker,
    now_ms: u64,
    keys: &[KeyCode],
) -> bool {
    for &code in keys {
        match snake_command(key(code)) {
            Some(SnakeCommand::Turn(dir)) => turns.push(dir),
            Some(SnakeCommand::Pause) => state.toggle_pause(),
            Some(SnakeCommand::Quit) => state.quit(),
            None => {}
        }
    }
    if state.is_running() && ticker.ready(now_ms) {
        game.step(turns.take());
        return true;
    }
    false
}

#[test]
fn test_snake_steps_once_per_interval() {
    let config = SnakeConfig::default();
    let mut game = SnakeGame::with_seed(config, 1);
    game.set_apple((10, 10));
    let mut turns = TurnBuffer::new();
    let mut state = LoopState::default();
    let mut ticker = Ticker::new(config.step_interval_ms(), 0);

    // 16ms frames for one second
    let steps = (1..=62)
        .filter(|&frame| {
            snake_frame(&mut game, &mut turns, &mut state, &mut ticker, frame * 16, &[])
        })
        .count();

    // frames land on 64, 128, 192... so each step takes four frames
    assert_eq!(steps, 15);
    assert_eq!(game.body().head(), (16, 0));
}

#[test]
fn test_last_key_before_a_step_wins() {
    let config = SnakeConfig::default();
    let mut game = SnakeGame::with_seed(config, 1);
    game.set_apple((10, 10));
    let mut turns = TurnBuffer::new();
    let mut state = LoopState::default();
    let mut ticker = Ticker::new(50, 0);

    snake_frame(&mut game, &mut turns, &mut state, &mut ticker, 10, &[KeyCode::Char('w')]);
    snake_frame(&mut game, &mut turns, &mut state, &mut ticker, 20, &[KeyCode::Down]);
    assert!(snake_frame(&mut game, &mut turns, &mut state, &mut ticker, 51, &[]));

    assert_eq!(game.direction(), Direction::Down);
    assert_eq!(game.body().head(), (1, 1));
    assert_eq!(turns.peek(), None);
}

#[test]
fn test_snake_waits_until_the_interval_is_exceeded() {
    let config = SnakeConfig::default();
    let mut game = SnakeGame::with_seed(config, 1);
    game.set_apple((10, 10));
    let mut turns = TurnBuffer::new();
    let mut state = LoopState::default();
    let mut ticker = Ticker::new(config.step_interval_ms(), 0);

    assert!(!snake_frame(&mut game, &mut turns, &mut state, &mut ticker, 50, &[]));
    assert_eq!(game.body().head(), (1, 0));
    assert!(snake_frame(&mut game, &mut turns, &mut state, &mut ticker, 51, &[]));
    assert_eq!(game.body().head(), (2, 0));
}

#[test]
fn test_pause_freezes_simulation() {
    let config = SnakeConfig::default();
    let mut game = SnakeGame::with_seed(config, 1);
    game.set_apple((10, 10));
    let mut turns = TurnBuffer::new();
    let mut state = LoopState::default();
    let mut ticker = Ticker::new(50, 0);

    snake_frame(&mut game, &mut turns, &mut state, &mut ticker, 10, &[KeyCode::Char('p')]);
    assert!(state.is_paused());
    for now in [60, 120, 500] {
        assert!(!snake_frame(&mut game, &mut turns, &mut state, &mut ticker, now, &[]));
    }
    assert_eq!(game.body().head(), (1, 0));

    // the stalled interval yields a single step on resume
    assert!(snake_frame(&mut game, &mut turns, &mut state, &mut ticker, 510, &[KeyCode::Char('P')]));
    assert!(state.is_running());
    assert!(!snake_frame(&mut game, &mut turns, &mut state, &mut ticker, 520, &[]));
    assert_eq!(game.body().head(), (2, 0));
}

#[test]
fn test_quit_ends_the_loop_from_pause() {
    let mut state = LoopState::Paused;
    if let Some(SnakeCommand::Quit) = snake_command(key(KeyCode::Esc)) {
        state.quit();
    }
    assert!(state.is_quit());
}

#[test]
fn test_tetris_fall_and_drops_both_score() {
    let mut game = GameState::with_seed(5);
    let mut ticker = Ticker::inclusive(TETRIS_FALL_MS, 0);

    // a manual drop between two timed falls
    assert!(!ticker.ready(100));
    if let Some(command) = tetris_command(key(KeyCode::Char('j'))) {
        game.apply(command);
    }
    assert!(ticker.ready(TETRIS_FALL_MS));
    game.tick();

    assert_eq!(game.score(), 2);
}

#[test]
fn test_ctrl_c_quits_both_games() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(snake_command(ctrl_c), Some(SnakeCommand::Quit));
    assert_eq!(tetris_command(ctrl_c), Some(TetrisCommand::Quit));
    assert_eq!(tetris_command(key(KeyCode::Char('c'))), None);
}
