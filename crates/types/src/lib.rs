//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, input mapping).
//!
//! # World Dimensions
//!
//! The world is measured in logical pixels, independent of the terminal:
//!
//! - **Screen**: 800 x 600 px
//! - **Grid**: 40 px cells, 20 columns x 15 visible rows
//! - **Level**: 16 generated rows (the last one hangs half off-screen)
//! - **Player start**: row 14 (the bottom visible row), middle column
//!
//! Every entity is centred on a grid cell: `index * GRID_SIZE + GRID_SIZE / 2`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MOVE_DURATION_MS` | 150 | One grid step of player movement |
//! | `RAIN_MUTATE_MS` | 80 | Rain glyph mutation period |
//! | `SHAKE_MS` | 250 | Screen shake after death |
//! | `FADE_IN_MS` | 250 | Fade-in after a level (re)start |
//!
//! # Row Generation
//!
//! | Draw `r` | Row |
//! |----------|-----|
//! | `r < 0.45` | road |
//! | `r < 0.70` | water |
//! | otherwise | safe |
//!
//! Rows within one cell of the start row, and the first three rows, are always safe.
//!
//! # Examples
//!
//! ```
//! use crossquest_types::{
//!     row_at, row_center_y, Direction, ObstacleKind, RowKind, GRID_SIZE, LEVEL_ROWS,
//! };
//!
//! assert_eq!(Direction::Up.delta(), (0, -1));
//! assert_eq!(RowKind::Water.obstacle_kind(), Some(ObstacleKind::Log));
//! assert_eq!(row_at(row_center_y(13)), 13);
//!
//! assert_eq!(GRID_SIZE, 40.0);
//! assert_eq!(LEVEL_ROWS, 16);
//! ```

/// Grid cell size in logical pixels.
pub const GRID_SIZE: f32 = 40.0;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Grid columns across the screen (20).
pub const GRID_COLS: u16 = (SCREEN_WIDTH / GRID_SIZE) as u16;

/// Fully visible grid rows (15).
pub const GRID_ROWS: u16 = (SCREEN_HEIGHT / GRID_SIZE) as u16;

/// Rows generated per level (16).
pub const LEVEL_ROWS: usize = GRID_ROWS as usize + 1;

/// Row the player enters the level on; also the lowest row the player may occupy.
pub const PLAYER_START_ROW: usize = GRID_ROWS as usize - 1;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of one discrete player move.
pub const MOVE_DURATION_MS: u32 = 150;

/// Score never grows past this value.
pub const MAX_SCORE: u32 = 9999;

/// Road probability threshold.
pub const ROAD_THRESHOLD: f32 = 0.45;

/// Water probability threshold (cumulative with road).
pub const WATER_THRESHOLD: f32 = 0.70;

/// Rows with an index below this are always safe.
pub const INITIAL_SAFE_ROWS: usize = 3;

/// Obstacle speed unit in px/s; actual speed is `[0.5, 1.5]` times this.
pub const OBSTACLE_BASE_SPEED: f32 = 70.0;

/// Rain speed unit in px/s; actual base speed is `[0.5, 1.0]` times this.
pub const RAIN_BASE_SPEED: f32 = 40.0;

/// Per-strip rain speed jitter in px/s.
pub const RAIN_SPEED_JITTER: f32 = 20.0;

/// Decorative rain strips per water row.
pub const RAIN_STRIPS_PER_ROW: usize = 3;

/// Horizontal advance of a single rain glyph in logical pixels.
pub const RAIN_GLYPH_PX: f32 = 8.0;

/// Glyphs per rain strip. Two screens wide so a strip always covers the row.
pub const RAIN_GLYPH_COUNT: usize = (2.0 * SCREEN_WIDTH / RAIN_GLYPH_PX) as usize;

/// Rain glyph mutation period.
pub const RAIN_MUTATE_MS: f32 = 80.0;

/// Player hitbox edge, in grid cells.
pub const PLAYER_SIZE_CELLS: f32 = 0.8;

/// Bug hitbox edge, in grid cells.
pub const BUG_SIZE_CELLS: f32 = 0.9;

/// Log width, in grid cells.
pub const LOG_LENGTH_CELLS: f32 = 3.0;

/// Screen shake after death.
pub const SHAKE_MS: u32 = 250;

/// Fade-in after a level (re)start.
pub const FADE_IN_MS: u32 = 250;

/// Glyphs used by the water rain effect.
///
/// Halfwidth katakana and digits: every glyph occupies a single terminal column.
pub const RAIN_ALPHABET: &[char] = &[
    'ｦ', 'ｧ', 'ｨ', 'ｩ', 'ｪ', 'ｫ', 'ｬ', 'ｭ', 'ｮ', 'ｯ', 'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ',
    'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ', 'ﾂ', 'ﾃ', 'ﾄ', 'ﾅ', 'ﾆ', 'ﾇ', 'ﾈ', 'ﾉ', 'ﾊ',
    'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ', 'ﾏ', 'ﾐ', 'ﾑ', 'ﾒ', 'ﾓ', 'ﾔ', 'ﾕ', 'ﾖ', 'ﾗ', 'ﾘ', 'ﾙ', 'ﾚ', 'ﾛ', 'ﾜ',
    'ﾝ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Pixel-space centre of a grid row.
pub fn row_center_y(row: usize) -> f32 {
    row as f32 * GRID_SIZE + GRID_SIZE / 2.0
}

/// Grid row containing a pixel-space y coordinate.
pub fn row_at(y: f32) -> i32 {
    (y / GRID_SIZE).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_dimensions() {
        assert_eq!(GRID_COLS, 20);
        assert_eq!(GRID_ROWS, 15);
        assert_eq!(LEVEL_ROWS, 16);
        assert_eq!(PLAYER_START_ROW, 14);
        assert_eq!(RAIN_GLYPH_COUNT, 200);
    }

    #[test]
    fn row_centres_carry_half_cell_offset() {
        assert_eq!(row_center_y(0), 20.0);
        assert_eq!(row_center_y(PLAYER_START_ROW), 580.0);
        assert_eq!(row_at(row_center_y(7)), 7);
        assert_eq!(row_at(-1.0), -1);
    }

    #[test]
    fn rain_alphabet_is_single_column() {
        assert!(RAIN_ALPHABET
            .iter()
            .all(|c| c.is_ascii_digit() || ('\u{FF66}'..='\u{FF9D}').contains(c)));
    }
}

/// Classification of one level row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Plain ground, nothing moves here
    Safe,
    /// Bugs crawl across; touching one is lethal
    Road,
    /// Logs drift across; standing anywhere else is lethal
    Water,
}

impl RowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowKind::Safe => "safe",
            RowKind::Road => "road",
            RowKind::Water => "water",
        }
    }

    /// The obstacle kind that populates this row, if any.
    pub fn obstacle_kind(&self) -> Option<ObstacleKind> {
        match self {
            RowKind::Safe => None,
            RowKind::Road => Some(ObstacleKind::Bug),
            RowKind::Water => Some(ObstacleKind::Log),
        }
    }
}

/// Moving things on road and water rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Lethal on contact
    Bug,
    /// The only safe footing on water
    Log,
}

impl ObstacleKind {
    /// Display (and hitbox) size in pixels: `(width, height)`.
    pub fn size(&self) -> (f32, f32) {
        match self {
            ObstacleKind::Bug => (GRID_SIZE * BUG_SIZE_CELLS, GRID_SIZE * BUG_SIZE_CELLS),
            ObstacleKind::Log => (GRID_SIZE * LOG_LENGTH_CELLS, GRID_SIZE * BUG_SIZE_CELLS),
        }
    }
}

/// One of the four grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Resolution order when several edges fire in the same tick.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid step as `(dx, dy)` in cells; y grows downward.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Game actions that can be applied to modify game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Step one cell in a direction (edge-triggered)
    Move(Direction),
    /// Leave the title screen and start playing
    Play,
    /// Start over after a game over, keeping the high score
    Restart,
}

/// Top-level lifecycle of a run.
///
/// `Start -> Playing` on [`GameAction::Play`], `Playing -> GameOver` on death,
/// `GameOver -> Playing` on [`GameAction::Restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Start,
    Playing,
    GameOver,
}

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    /// Touched a bug
    Bug,
    /// Finished a move on water without a log underfoot
    Drowned,
    /// Carried past the screen edge by a log
    SweptAway,
}

/// Core-side event emitted by the rules, consumed by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new furthest row was reached.
    Scored { score: u32, high_score: u32 },
    /// Up was pressed on row 0; a fresh level was generated.
    LevelCleared,
    /// The player died. Emitted at most once per run.
    Died { cause: DeathCause, score: u32 },
}
