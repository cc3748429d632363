//! Player module - grid-stepping avatar with an explicit move interpolation
//!
//! A move is a [`MoveTween`] advanced by the frame delta. While a tween is in
//! flight the player ignores input and is not carried by logs.

use crate::geometry::Aabb;
use crate::types::{
    row_at, row_center_y, GRID_COLS, GRID_SIZE, MOVE_DURATION_MS, PLAYER_SIZE_CELLS,
    PLAYER_START_ROW,
};

/// Horizontal start position: centre of the middle column.
pub fn start_x() -> f32 {
    (GRID_COLS / 2) as f32 * GRID_SIZE + GRID_SIZE / 2.0
}

/// Vertical start position: centre of the start row.
pub fn start_y() -> f32 {
    row_center_y(PLAYER_START_ROW)
}

/// Quadratic ease-out.
fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

/// In-flight interpolation between two grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTween {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub elapsed_ms: u32,
    pub duration_ms: u32,
}

impl MoveTween {
    pub fn new(from: (f32, f32), to: (f32, f32)) -> Self {
        Self {
            from,
            to,
            elapsed_ms: 0,
            duration_ms: MOVE_DURATION_MS,
        }
    }

    /// Normalised progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Current interpolated position.
    pub fn position(&self) -> (f32, f32) {
        if self.is_done() {
            return self.to;
        }
        let k = ease_out_quad(self.progress());
        (
            self.from.0 + (self.to.0 - self.from.0) * k,
            self.from.1 + (self.to.1 - self.from.1) * k,
        )
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    dead: bool,
    tween: Option<MoveTween>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: start_x(),
            y: start_y(),
            dead: false,
            tween: None,
        }
    }

    /// Back to the start cell, alive, with no move in flight.
    pub fn respawn(&mut self) {
        *self = Self::new();
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Mark the player dead. Returns `false` if already dead.
    pub fn kill(&mut self) -> bool {
        if self.dead {
            return false;
        }
        self.dead = true;
        self.tween = None;
        true
    }

    /// Hitbox: a square 80% of a grid cell.
    pub fn bounds(&self) -> Aabb {
        let size = GRID_SIZE * PLAYER_SIZE_CELLS;
        Aabb::new(self.x, self.y, size, size)
    }

    /// Grid row under the player's centre.
    pub fn row(&self) -> i32 {
        row_at(self.y)
    }

    pub fn is_moving(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween(&self) -> Option<&MoveTween> {
        self.tween.as_ref()
    }

    /// Start interpolating towards `target`.
    pub fn begin_move(&mut self, target: (f32, f32)) {
        self.tween = Some(MoveTween::new((self.x, self.y), target));
    }

    /// Advance the in-flight move. Returns `true` on the frame it completes.
    pub fn advance_move(&mut self, elapsed_ms: u32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        tween.advance(elapsed_ms);
        let (x, y) = tween.position();
        self.x = x;
        self.y = y;
        if tween.is_done() {
            self.tween = None;
            return true;
        }
        false
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_grid_aligned() {
        let p = Player::new();
        assert_eq!(p.x, 420.0);
        assert_eq!(p.y, 580.0);
        assert_eq!(p.row(), PLAYER_START_ROW as i32);
        assert_eq!((p.x - GRID_SIZE / 2.0) % GRID_SIZE, 0.0);
    }

    #[test]
    fn test_tween_reaches_target_exactly() {
        let mut p = Player::new();
        p.begin_move((420.0, 540.0));
        assert!(p.is_moving());

        let mut completed = 0;
        for _ in 0..20 {
            if p.advance_move(16) {
                completed += 1;
            }
        }
        assert_eq!(completed, 1);
        assert!(!p.is_moving());
        assert_eq!((p.x, p.y), (420.0, 540.0));
    }

    #[test]
    fn test_tween_eases_out() {
        let mut t = MoveTween::new((0.0, 0.0), (40.0, 0.0));
        t.advance(MOVE_DURATION_MS / 2);
        let (x, _) = t.position();
        // Quadratic ease-out covers 75% of the distance at the halfway point.
        assert!((x - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_kill_is_idempotent() {
        let mut p = Player::new();
        assert!(p.kill());
        assert!(!p.kill());
        assert!(p.is_dead());
    }

    #[test]
    fn test_kill_cancels_move() {
        let mut p = Player::new();
        p.begin_move((420.0, 540.0));
        p.kill();
        assert!(!p.is_moving());
        assert!(!p.advance_move(16));
    }

    #[test]
    fn test_bounds_is_square() {
        let p = Player::new();
        let b = p.bounds();
        assert_eq!((b.w, b.h), (32.0, 32.0));
        assert_eq!((b.cx, b.cy), (p.x, p.y));
    }
}
