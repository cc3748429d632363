//! Front-end screen effects: shake after a death, fade-in on a fresh level.
//!
//! Timers are advanced by the same fixed tick as the game and react to
//! [`GameEvent`]s, so the core never knows about them.

use crate::term::ViewEffects;
use crate::types::{GameEvent, FADE_IN_MS, SHAKE_MS};

/// Shake amplitude in terminal columns at the start of the effect.
const SHAKE_AMPLITUDE: i16 = 2;
/// Milliseconds per shake half-period.
const SHAKE_STEP_MS: u32 = 32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenEffects {
    shake_left_ms: u32,
    fade_left_ms: u32,
}

impl ScreenEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_shake(&mut self) {
        self.shake_left_ms = SHAKE_MS;
    }

    pub fn start_fade(&mut self) {
        self.fade_left_ms = FADE_IN_MS;
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_left_ms > 0
    }

    pub fn is_fading(&self) -> bool {
        self.fade_left_ms > 0
    }

    pub fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Died { .. } => self.start_shake(),
            GameEvent::LevelCleared => self.start_fade(),
            GameEvent::Scored { .. } => {}
        }
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.shake_left_ms = self.shake_left_ms.saturating_sub(elapsed_ms);
        self.fade_left_ms = self.fade_left_ms.saturating_sub(elapsed_ms);
    }

    /// Horizontal offset; alternates sides and decays to zero.
    pub fn shake_offset(&self) -> i16 {
        if self.shake_left_ms == 0 {
            return 0;
        }
        let elapsed = SHAKE_MS - self.shake_left_ms;
        let side = if (elapsed / SHAKE_STEP_MS) % 2 == 0 { 1 } else { -1 };
        let amplitude = if self.shake_left_ms * 2 > SHAKE_MS {
            SHAKE_AMPLITUDE
        } else {
            1
        };
        side * amplitude
    }

    /// Brightness ramping linearly from 0 to 1 over the fade.
    pub fn brightness(&self) -> f32 {
        if self.fade_left_ms == 0 {
            return 1.0;
        }
        1.0 - self.fade_left_ms as f32 / FADE_IN_MS as f32
    }

    pub fn view_effects(&self) -> ViewEffects {
        ViewEffects {
            shake: (self.shake_offset(), 0),
            brightness: self.brightness(),
        }
    }
}
