//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides an
//! edge-triggered input handler suitable for terminal environments (including
//! terminals without key-release events).

pub mod handler;
pub mod map;

pub use crossquest_types as types;

pub use handler::InputHandler;
pub use map::{direction_for, handle_key_event, should_quit};
