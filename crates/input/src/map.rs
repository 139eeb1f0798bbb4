//! Key mapping from terminal events to game commands.

use crate::types::{Direction, SnakeCommand, TetrisCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if key should quit either game (Esc, q, Ctrl+C).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map keyboard input to snake commands.
pub fn snake_command(key: KeyEvent) -> Option<SnakeCommand> {
    if should_quit(key) {
        return Some(SnakeCommand::Quit);
    }

    match key.code {
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(SnakeCommand::Turn(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(SnakeCommand::Turn(Direction::Up))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(SnakeCommand::Turn(Direction::Left))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(SnakeCommand::Turn(Direction::Down))
        }
        KeyCode::Char('p') | KeyCode::Char('P') => Some(SnakeCommand::Pause),
        _ => None,
    }
}

/// Map keyboard input to tetris commands (vi-style keys plus arrows).
pub fn tetris_command(key: KeyEvent) -> Option<TetrisCommand> {
    if should_quit(key) {
        return Some(TetrisCommand::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(TetrisCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(TetrisCommand::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(TetrisCommand::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(TetrisCommand::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(TetrisCommand::RotateCcw),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(TetrisCommand::Pause),

        _ => None,
    }
}
