//! Rain module - the scrolling "digital rain" strips drawn over water rows
//!
//! Purely cosmetic: strips never take part in collision or scoring.

use crate::rng::GameRng;
use crate::types::{
    GRID_SIZE, RAIN_BASE_SPEED, RAIN_GLYPH_COUNT, RAIN_GLYPH_PX, RAIN_MUTATE_MS,
    RAIN_SPEED_JITTER, RAIN_STRIPS_PER_ROW,
};

/// One scrolling text strip.
#[derive(Debug, Clone, PartialEq)]
pub struct RainStrip {
    /// Left edge of the strip in pixels; always within `[-width/2, 0]` after an update.
    pub x: f32,
    /// Vertical centre in pixels.
    pub y: f32,
    /// Signed scroll speed in px/s.
    pub speed: f32,
    pub glyphs: Vec<char>,
    update_counter_ms: f32,
}

impl RainStrip {
    pub fn new(y: f32, speed: f32, glyphs: Vec<char>, update_counter_ms: f32) -> Self {
        Self {
            x: 0.0,
            y,
            speed,
            glyphs,
            update_counter_ms,
        }
    }

    /// Build the strips for one water row centred at `row_y`.
    ///
    /// All strips of a row share a direction; each gets its own jittered speed.
    pub fn spawn_row(row_y: f32, rng: &mut GameRng) -> [RainStrip; RAIN_STRIPS_PER_ROW] {
        let direction = rng.sign();
        let base_speed = (rng.unit() * 0.5 + 0.5) * RAIN_BASE_SPEED;

        std::array::from_fn(|j| {
            let glyphs = (0..RAIN_GLYPH_COUNT).map(|_| rng.glyph()).collect();
            let y_offset =
                j as f32 * (GRID_SIZE / RAIN_STRIPS_PER_ROW as f32) - GRID_SIZE / 2.0 + 10.0;
            let speed = base_speed + rng.unit() * RAIN_SPEED_JITTER;
            RainStrip::new(row_y + y_offset, speed * direction, glyphs, rng.unit() * 100.0)
        })
    }

    /// Strip width in pixels.
    pub fn width(&self) -> f32 {
        self.glyphs.len() as f32 * RAIN_GLYPH_PX
    }

    pub fn update_counter_ms(&self) -> f32 {
        self.update_counter_ms
    }

    /// Scroll and occasionally scramble one glyph.
    pub fn update(&mut self, elapsed_ms: u32, rng: &mut GameRng) {
        self.x += self.speed * (elapsed_ms as f32 / 1000.0);
        if self.speed > 0.0 && self.x > 0.0 {
            self.x = -self.width() / 2.0;
        } else if self.speed < 0.0 && self.x < -self.width() / 2.0 {
            self.x = 0.0;
        }

        self.update_counter_ms += elapsed_ms as f32;
        if self.update_counter_ms > RAIN_MUTATE_MS {
            self.update_counter_ms = 0.0;
            if !self.glyphs.is_empty() {
                let i = rng.index(self.glyphs.len());
                self.glyphs[i] = rng.glyph();
            }
        }
    }

    /// Glyph drawn at pixel column `px`, if the strip covers it.
    pub fn glyph_at(&self, px: f32) -> Option<char> {
        let offset = px - self.x;
        if offset < 0.0 {
            return None;
        }
        self.glyphs.get((offset / RAIN_GLYPH_PX) as usize).copied()
    }
}
