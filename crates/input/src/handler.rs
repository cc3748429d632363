//! Edge-triggered input handler for terminal environments.
//!
//! A direction fires once per key-down transition. Terminals that never emit
//! key release events report a held key as a stream of presses, so a key is
//! considered released once no press for it has arrived within a timeout.
//! The cost is that two taps of the same key closer together than the
//! timeout read as one held key. When the terminal does report releases,
//! enable them with [`InputHandler::with_release_events`] and the timeout is
//! skipped.

use crossterm::event::KeyCode;

use crate::map::direction_for;
use crate::types::{Direction, GameAction};

// In terminals without key-release events, auto-repeat presses arrive well
// inside this window while a deliberate second tap usually does not.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

fn slot(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Tracks which directions are held so repeats do not count as new edges.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: [bool; 4],
    since_press_ms: [u32; 4],
    key_release_timeout_ms: u32,
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: [false; 4],
            since_press_ms: [0; 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Trust real key release events instead of the auto-release timeout.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[slot(dir)]
    }

    /// Register a key press; returns a move only on a down edge.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let dir = direction_for(code)?;
        let i = slot(dir);
        self.since_press_ms[i] = 0;
        if self.held[i] {
            return None;
        }
        self.held[i] = true;
        Some(GameAction::Move(dir))
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(dir) = direction_for(code) {
            let i = slot(dir);
            self.held[i] = false;
            self.since_press_ms[i] = 0;
        }
    }

    /// Advance the auto-release timers.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.release_events {
            return;
        }
        for i in 0..self.held.len() {
            if !self.held[i] {
                continue;
            }
            self.since_press_ms[i] = self.since_press_ms[i].saturating_add(elapsed_ms);
            if self.since_press_ms[i] > self.key_release_timeout_ms {
                self.held[i] = false;
                self.since_press_ms[i] = 0;
            }
        }
    }

    pub fn reset(&mut self) {
        self.held = [false; 4];
        self.since_press_ms = [0; 4];
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
