//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map the 800x600 world onto a configurable number of characters per grid cell
//! - Only write the cells that changed since the previous frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use crossquest_core as core;
pub use crossquest_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, ViewEffects, Viewport, MAX_CELL_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
