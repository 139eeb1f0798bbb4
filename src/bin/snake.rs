//! Terminal Snake.
//!
//! WASD or arrow keys steer, P pauses, Esc quits. The board wraps at every
//! edge; biting yourself starts over with a single segment.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_arcade::engine::{Clock, LoopState, Ticker};
use tui_arcade::input::{snake_command, TurnBuffer};
use tui_arcade::logging;
use tui_arcade::snake::{SnakeConfig, SnakeGame};
use tui_arcade::term::{FrameBuffer, HeadTexture, SnakeView, TerminalRenderer, HEAD_TEXTURE_PATH};
use tui_arcade::types::{SnakeCommand, FRAME_MS};

#[derive(Parser)]
#[command(name = "snake", about = "Terminal Snake")]
struct Args {
    /// Draw the head with the bitmap in ./flushed.bmp
    #[arg(short = 'f', long = "flushed")]
    flushed: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_or_warn("snake.log");
    info!("starting snake");

    let mut view = SnakeView::default();
    if args.flushed {
        let (tile_w, tile_h) = view.tile_size();
        match HeadTexture::load(HEAD_TEXTURE_PATH, tile_w, tile_h) {
            Ok(texture) => view = view.with_head_texture(texture),
            Err(e) => warn!("{e:#}; drawing the head without a texture"),
        }
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &view);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("snake exited");
    result
}

fn run(term: &mut TerminalRenderer, view: &SnakeView) -> Result<()> {
    let config = SnakeConfig::default();
    let mut game = SnakeGame::from_entropy(config);
    let mut turns = TurnBuffer::new();
    let mut state = LoopState::Running;

    let clock = Clock::start();
    let mut ticker = Ticker::new(config.step_interval_ms(), clock.now_ms());
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);

    while !state.is_quit() {
        // Input, waiting at most one frame.
        let timeout = if state.is_running() {
            clock.until(ticker.deadline_ms()).min(frame)
        } else {
            frame
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match snake_command(key) {
                    Some(SnakeCommand::Turn(dir)) => turns.push(dir),
                    Some(SnakeCommand::Pause) => state.toggle_pause(),
                    Some(SnakeCommand::Quit) => state.quit(),
                    None => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Simulation.
        if state.is_running() && ticker.ready(clock.now_ms()) {
            game.step(turns.take());
        }

        // Render.
        view.render_into(&game, state.is_paused(), term.viewport(), &mut fb);
        term.present(&mut fb)?;
    }

    info!("quit at length {}", game.body().len());
    Ok(())
}
