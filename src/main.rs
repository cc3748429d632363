//! Terminal CrossQuest runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! The game advances on a fixed 16ms tick; input is polled with whatever is
//! left of the current tick as timeout.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crossquest::core::{GameState, Session};
use crossquest::input::{direction_for, handle_key_event, should_quit, InputHandler};
use crossquest::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crossquest::types::{GameEvent, TICK_MS};
use crossquest::{Config, ScreenEffects};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    log::info!(
        "starting: seed {}, cell {}x{}",
        config.seed,
        config.cell_w,
        config.cell_h
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("failed to restore terminal: {err:#}");
    }
    if let Err(err) = &result {
        log::error!("exited with error: {err:#}");
    }
    result
}

/// The terminal is in raw mode on the alternate screen, so logs only go to a file.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game_state = GameState::new(config.seed, Session::default());

    let view = GameView::new(config.cell_w, config.cell_h);
    let mut input_handler = InputHandler::new().with_release_events(term.keyboard_enhanced());
    let mut effects = ScreenEffects::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            &game_state,
            Viewport::new(w, h),
            effects.view_effects(),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            log::info!(
                                "quit (score {}, high {})",
                                game_state.score(),
                                game_state.high_score()
                            );
                            return Ok(());
                        }

                        if direction_for(key.code).is_some() {
                            // Moves are edge-triggered through the handler.
                            if let Some(action) = input_handler.handle_key_press(key.code) {
                                game_state.apply_action(action);
                            }
                        } else if let Some(action) = handle_key_event(key, game_state.phase()) {
                            if game_state.apply_action(action) {
                                input_handler.reset();
                                effects.start_fade();
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Holding a key never repeats a move.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            input_handler.update(TICK_MS);
            game_state.tick(TICK_MS);
            effects.advance(TICK_MS);

            for event in game_state.take_events() {
                if let GameEvent::Died { cause, score } = event {
                    log::debug!("death by {cause:?} at score {score}");
                }
                effects.on_event(&event);
            }
        }
    }
}
