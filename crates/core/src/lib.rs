//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical levels
//! - **Testable**: Unit tests for every rule, driven by explicit frame deltas
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`level`]: procedural row layout, obstacle spawning and wrapping
//! - [`rain`]: the cosmetic scrolling glyph strips over water rows
//! - [`player`]: grid-stepping player with an explicit move interpolation
//! - [`scoring`]: furthest-row scoring and the cross-run [`Session`]
//! - [`geometry`]: axis-aligned overlap tests
//! - [`game_state`]: the complete game state and per-frame update order
//! - [`rng`]: seeded PCG randomness
//!
//! # Game Rules
//!
//! - **Rows**: safe, road (bugs) or water (logs); the start area and the top
//!   three rows are always safe
//! - **Moves**: one cell per key press, 150ms each, no input buffering
//! - **Scoring**: +1 per newly reached row, capped at 9999
//! - **Death**: touching a bug, ending a move on water without a log, or
//!   being carried off-screen by a log
//! - **Level clear**: press up on the top row to get a fresh level
//!
//! # Example
//!
//! ```
//! use crossquest_core::{GameState, Session};
//! use crossquest_types::{Direction, GameAction, GamePhase, TICK_MS};
//!
//! // A new game starts on the title screen, carrying the previous high score.
//! let mut game = GameState::new(12345, Session::new(7));
//! game.apply_action(GameAction::Play);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! // The row above the start is always safe.
//! game.apply_action(GameAction::Move(Direction::Up));
//! for _ in 0..12 {
//!     game.tick(TICK_MS);
//! }
//!
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.high_score(), 7);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Obstacle motion, log carry and the rain effect all
//! scale with the delta; nothing in here reads a clock.

pub mod game_state;
pub mod geometry;
pub mod level;
pub mod player;
pub mod rain;
pub mod rng;
pub mod scoring;

pub use crossquest_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use geometry::Aabb;
pub use level::{Level, Obstacle, Row};
pub use player::{MoveTween, Player};
pub use rain::RainStrip;
pub use rng::GameRng;
pub use scoring::{ScoreBoard, Session};
