//! Terminal Kniffel runner.
//!
//! Acquires the terminal once, then redraws after every key press. The
//! session is restored on every exit path, including errors returned from
//! the loop.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use kniffel::term::{compose_screen, FrameBuffer, TerminalSession};
use kniffel::{logging, Config, Flow, Game};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(seeded = config.seed.is_some(), "starting kniffel");

    let mut term = TerminalSession::enter().context("entering terminal session")?;
    let result = run(&mut term, &config);

    let _ = term.exit();
    result
}

fn run(term: &mut TerminalSession, config: &Config) -> Result<()> {
    let mut game = Game::start(config);
    let mut screen = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = term.size();
        compose_screen(game.dice(), &game.status(), w, h, &mut screen);
        term.draw(&screen)?;

        match event::read().context("reading terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if game.handle_key(key) == Flow::Quit {
                    info!(roll_count = game.roll_count(), "quit");
                    return Ok(());
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
