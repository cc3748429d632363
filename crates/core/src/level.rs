//! Level module - procedural row layout and moving obstacles
//!
//! A level is an ordered list of rows indexed from the top (row 0) downward.
//! Rows are only ever appended by [`Level::generate_rows`]; [`Level::reset`]
//! is the one operation that shrinks the layout.

use arrayvec::ArrayVec;

use crate::geometry::Aabb;
use crate::rain::RainStrip;
use crate::rng::GameRng;
use crate::types::*;

/// Upper bound on obstacles in one row.
pub const MAX_OBSTACLES_PER_ROW: usize = 3;

/// A bug or a log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Horizontal centre in pixels.
    pub x: f32,
    /// Vertical centre in pixels.
    pub y: f32,
    /// Signed horizontal velocity in px/s.
    pub vx: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, y: f32, vx: f32) -> Self {
        let (width, height) = kind.size();
        Self {
            kind,
            x,
            y,
            vx,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    /// Integrate velocity over `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.x += self.vx * (elapsed_ms as f32 / 1000.0);
    }

    /// Move to the opposite edge once fully off-screen in the direction of travel.
    ///
    /// Returns `true` if the obstacle wrapped.
    pub fn wrap(&mut self) -> bool {
        let half = self.width / 2.0;
        if self.vx > 0.0 && self.x > SCREEN_WIDTH + half {
            self.x = -half;
            true
        } else if self.vx < 0.0 && self.x < -half {
            self.x = SCREEN_WIDTH + half;
            true
        } else {
            false
        }
    }
}

/// One horizontal strip of the level.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    pub kind: RowKind,
    /// Vertical centre in pixels.
    pub y: f32,
    pub obstacles: ArrayVec<Obstacle, MAX_OBSTACLES_PER_ROW>,
    pub rain: ArrayVec<RainStrip, RAIN_STRIPS_PER_ROW>,
}

/// Classify row `index`; the start area and the top rows are never hazardous.
pub fn classify_row(index: usize, rng: &mut GameRng) -> RowKind {
    let near_player = index.abs_diff(PLAYER_START_ROW) <= 1;
    let initial_safe_zone = index < INITIAL_SAFE_ROWS;
    if near_player || initial_safe_zone {
        return RowKind::Safe;
    }

    let r = rng.unit();
    if r < ROAD_THRESHOLD {
        RowKind::Road
    } else if r < WATER_THRESHOLD {
        RowKind::Water
    } else {
        RowKind::Safe
    }
}

/// Lay out the moving obstacles for a road or water row.
///
/// Obstacles are spread across 1.5 screen widths and shifted so that the
/// group straddles the wrap boundary on the side it travels towards.
pub fn spawn_obstacles(
    kind: ObstacleKind,
    row_y: f32,
    rng: &mut GameRng,
) -> ArrayVec<Obstacle, MAX_OBSTACLES_PER_ROW> {
    let direction = rng.sign();
    let speed = rng.range(0.5, 1.5) * OBSTACLE_BASE_SPEED;
    let count = 2 + rng.index(2);
    let spacing = (SCREEN_WIDTH * 1.5) / count as f32;

    let mut out = ArrayVec::new();
    for j in 0..count {
        let jitter = rng.range(-GRID_SIZE, GRID_SIZE);
        let base = j as f32 * spacing + jitter;
        let x = if direction > 0.0 {
            base - SCREEN_WIDTH * 0.25
        } else {
            base + SCREEN_WIDTH * 1.25
        };
        out.push(Obstacle::new(kind, x, row_y, speed * direction));
    }
    out
}

/// Procedurally generated level layout.
#[derive(Debug, Clone, Default)]
pub struct Level {
    rows: Vec<Row>,
    next_row: usize,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` freshly classified rows below the last generated one.
    pub fn generate_rows(&mut self, count: usize, rng: &mut GameRng) {
        for _ in 0..count {
            let index = self.next_row;
            let y = row_center_y(index);
            let kind = classify_row(index, rng);

            let mut rain = ArrayVec::new();
            if kind == RowKind::Water {
                rain.extend(RainStrip::spawn_row(y, rng));
            }

            let obstacles = match kind.obstacle_kind() {
                Some(obstacle_kind) => spawn_obstacles(obstacle_kind, y, rng),
                None => ArrayVec::new(),
            };

            log::debug!(
                "row {index}: {} with {} obstacles",
                kind.as_str(),
                obstacles.len()
            );

            self.rows.push(Row {
                index,
                kind,
                y,
                obstacles,
                rain,
            });
            self.next_row += 1;
        }
    }

    /// Drop every row and restart numbering from the top.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.next_row = 0;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index the next generated row will get.
    pub fn next_row(&self) -> usize {
        self.next_row
    }

    /// Classification of a row, `None` outside the generated range.
    pub fn kind_at(&self, row: i32) -> Option<RowKind> {
        usize::try_from(row)
            .ok()
            .and_then(|i| self.rows.get(i))
            .map(|r| r.kind)
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.rows.iter().flat_map(|r| r.obstacles.iter())
    }

    pub fn rain(&self) -> impl Iterator<Item = &RainStrip> {
        self.rows.iter().flat_map(|r| r.rain.iter())
    }

    /// First obstacle of `kind` overlapping `bounds`.
    pub fn overlapping(&self, kind: ObstacleKind, bounds: &Aabb) -> Option<&Obstacle> {
        self.obstacles()
            .find(|o| o.kind == kind && o.bounds().intersects(bounds))
    }

    /// Integrate obstacle motion, then wrap anything that left the screen.
    pub fn update_obstacles(&mut self, elapsed_ms: u32) {
        for obstacle in self.rows.iter_mut().flat_map(|r| r.obstacles.iter_mut()) {
            obstacle.advance(elapsed_ms);
            obstacle.wrap();
        }
    }

    pub fn update_rain(&mut self, elapsed_ms: u32, rng: &mut GameRng) {
        for strip in self.rows.iter_mut().flat_map(|r| r.rain.iter_mut()) {
            strip.update(elapsed_ms, rng);
        }
    }

    #[doc(hidden)]
    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }
}
