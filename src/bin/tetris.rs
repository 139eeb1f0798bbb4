//! Terminal Tetris.
//!
//! H/L shift, J drops one row, K rotates (Z the other way), P pauses, Esc
//! quits. Pieces fall one row every 500ms. Topping out ends the program.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_arcade::engine::{Clock, LoopState, Ticker};
use tui_arcade::input::tetris_command;
use tui_arcade::logging;
use tui_arcade::term::{FrameBuffer, TerminalRenderer, TetrisView};
use tui_arcade::tetris::{GameState, StepResult};
use tui_arcade::types::{TetrisCommand, FRAME_MS, TETRIS_FALL_MS};

#[derive(Parser)]
#[command(name = "tetris", about = "Terminal Tetris")]
struct Args {}

/// How the loop ended
enum Outcome {
    Quit,
    GameOver { score: u32 },
}

fn main() -> Result<()> {
    let _args = Args::parse();
    logging::init_or_warn("tetris.log");
    info!("starting tetris");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Outcome::GameOver { score } = result? {
        println!("game over");
        println!("Score: {score}");
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<Outcome> {
    let mut game = GameState::from_entropy();
    let view = TetrisView::default();
    let mut state = LoopState::Running;

    let clock = Clock::start();
    let mut ticker = Ticker::inclusive(TETRIS_FALL_MS, clock.now_ms());
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);

    while !state.is_quit() {
        let mut result = StepResult::Continue;

        // Input: moves and rotations apply immediately.
        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match tetris_command(key) {
                    Some(TetrisCommand::Quit) => state.quit(),
                    Some(TetrisCommand::Pause) => state.toggle_pause(),
                    Some(command) if state.is_running() => result = game.apply(command),
                    _ => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Timed fall.
        if result == StepResult::Continue && state.is_running() && ticker.ready(clock.now_ms()) {
            result = game.tick();
        }

        if result == StepResult::GameOver {
            return Ok(Outcome::GameOver {
                score: game.score(),
            });
        }

        view.render_into(&game, state.is_paused(), term.viewport(), &mut fb);
        term.present(&mut fb)?;
    }

    info!("quit with score {}", game.score());
    Ok(Outcome::Quit)
}
