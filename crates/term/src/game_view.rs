//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! World pixels map onto terminal cells by scaling one grid cell to
//! `cell_w x cell_h` characters. Sprites keep their pixel width, so a log is
//! three cells long and a bug or the player is a little under one.

use crate::core::{GameState, Level, Player};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, ObstacleKind, RowKind, GRID_COLS, GRID_ROWS, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Per-frame screen effects driven by the runner's timers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewEffects {
    /// Offset of the whole play field in terminal cells.
    pub shake: (i16, i16),
    /// 0.0 is black, 1.0 is full brightness.
    pub brightness: f32,
}

impl Default for ViewEffects {
    fn default() -> Self {
        Self {
            shake: (0, 0),
            brightness: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const SAFE_BG: Rgb = Rgb::new(34, 70, 40);
const ROAD_BG: Rgb = Rgb::new(40, 40, 46);
const WATER_BG: Rgb = Rgb::new(18, 36, 88);
const RAIN_FG: Rgb = Rgb::new(70, 200, 120);
const LANE_FG: Rgb = Rgb::new(90, 90, 96);
const BUG_FG: Rgb = Rgb::new(230, 70, 60);
const LOG_FG: Rgb = Rgb::new(190, 140, 80);
const LOG_BG: Rgb = Rgb::new(110, 70, 36);
const PLAYER_FG: Rgb = Rgb::new(120, 240, 140);
const DEAD_FG: Rgb = Rgb::new(255, 80, 80);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Largest accepted grid cell size, in terminal cells per side.
pub const MAX_CELL_SIZE: u16 = 64;

/// A lightweight terminal renderer for CrossQuest.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 keeps a grid cell roughly square in most terminal fonts.
        Self::new(3, 1)
    }
}

/// Play-field origin and size in terminal cells (inside the border).
#[derive(Debug, Clone, Copy)]
struct Field {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the play field in terminal cells, border excluded.
    pub fn field_size(&self) -> (u16, u16) {
        (GRID_COLS * self.cell_w, GRID_ROWS * self.cell_h)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is only reallocated when
    /// the viewport size changes.
    pub fn render_into(
        &self,
        game: &GameState,
        viewport: Viewport,
        effects: ViewEffects,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (field_w, field_h) = self.field_size();
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let start_x = start_x.saturating_add_signed(effects.shake.0);
        let start_y = start_y.saturating_add_signed(effects.shake.1);

        let field = Field {
            x: start_x + 1,
            y: start_y + 1,
            w: field_w,
            h: field_h,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        self.draw_rows(fb, game.level(), field);
        self.draw_obstacles(fb, game.level(), field);
        self.draw_player(fb, game.player(), field);
        self.draw_hud(fb, game, start_x, start_y, frame_w);
        self.draw_side_panel(fb, viewport, start_x, start_y, frame_w);

        match game.phase() {
            GamePhase::Start => {
                let lines = [
                    ("CrossQuest", CellStyle::new(PLAYER_FG, BLACK).bold()),
                    ("", CellStyle::new(TEXT_FG, BLACK)),
                    ("[ Play ]", CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold()),
                    ("Enter / Space", CellStyle::new(TEXT_FG, BLACK).dim()),
                ];
                draw_panel(fb, start_x, start_y, frame_w, frame_h, &lines, None);
            }
            GamePhase::GameOver => {
                let lines = [
                    ("Congratulations!", CellStyle::new(DEAD_FG, BLACK).bold()),
                    ("", CellStyle::new(TEXT_FG, BLACK)),
                    ("Score: ", CellStyle::new(TEXT_FG, BLACK)),
                    ("", CellStyle::new(TEXT_FG, BLACK)),
                    ("[ Try Again ]", CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold()),
                    ("Enter / Space / R", CellStyle::new(TEXT_FG, BLACK).dim()),
                ];
                draw_panel(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    &lines,
                    Some((2, game.score())),
                );
            }
            GamePhase::Playing => {}
        }

        fb.fade(effects.brightness);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, ViewEffects::default(), &mut fb);
        fb
    }

    /// Terminal span `(start, len)` covering `[lo, lo + size)` world pixels
    /// along an axis scaled by `cells_per_grid`.
    fn span(lo: f32, size: f32, cells_per_grid: u16) -> (i32, i32) {
        let k = cells_per_grid as f32 / GRID_SIZE;
        let start = (lo * k).round() as i32;
        let len = ((size * k).round() as i32).max(1);
        (start, len)
    }

    fn draw_rows(&self, fb: &mut FrameBuffer, level: &Level, field: Field) {
        for row in level.rows().iter().take(GRID_ROWS as usize) {
            let bg = row_bg(row.kind);
            let ty = field.y + (row.index as u16) * self.cell_h;
            fb.fill_rect(field.x, ty, field.w, self.cell_h, ' ', CellStyle::new(TEXT_FG, bg));

            match row.kind {
                RowKind::Road => {
                    // Lane markings on the bottom line of the row.
                    let style = CellStyle::new(LANE_FG, bg).dim();
                    let y = ty + self.cell_h - 1;
                    for dx in (0..field.w).step_by(4) {
                        fb.put_char(field.x + dx, y, '·', style);
                    }
                }
                RowKind::Water => {
                    let style = CellStyle::new(RAIN_FG, bg).dim();
                    for strip in &row.rain {
                        let sub = ((strip.y / GRID_SIZE) * self.cell_h as f32).floor() as i32;
                        if sub < 0 || sub >= field.h as i32 {
                            continue;
                        }
                        for dx in 0..field.w {
                            let px = (dx as f32 + 0.5) * GRID_SIZE / self.cell_w as f32;
                            if let Some(g) = strip.glyph_at(px) {
                                fb.put_char(field.x + dx, field.y + sub as u16, g, style);
                            }
                        }
                    }
                }
                RowKind::Safe => {}
            }
        }
    }

    fn draw_obstacles(&self, fb: &mut FrameBuffer, level: &Level, field: Field) {
        for obstacle in level.obstacles() {
            let b = obstacle.bounds();
            let (ch, style) = match obstacle.kind {
                ObstacleKind::Bug => ('▓', CellStyle::new(BUG_FG, ROAD_BG).bold()),
                ObstacleKind::Log => ('═', CellStyle::new(LOG_FG, LOG_BG)),
            };
            self.fill_world_rect(fb, field, b.left(), b.top(), b.w, b.h, ch, style, false);
        }
    }

    fn draw_player(&self, fb: &mut FrameBuffer, player: &Player, field: Field) {
        let b = player.bounds();
        let (ch, fg) = if player.is_dead() {
            ('X', DEAD_FG)
        } else {
            ('█', PLAYER_FG)
        };
        let style = CellStyle::new(fg, BLACK).bold();
        self.fill_world_rect(fb, field, b.left(), b.top(), b.w, b.h, ch, style, true);
    }

    /// Fill a world-space rectangle, clipped to the play field.
    ///
    /// With `keep_bg` the existing background shows through.
    #[allow(clippy::too_many_arguments)]
    fn fill_world_rect(
        &self,
        fb: &mut FrameBuffer,
        field: Field,
        left: f32,
        top: f32,
        w: f32,
        h: f32,
        ch: char,
        style: CellStyle,
        keep_bg: bool,
    ) {
        let (cx, cw) = Self::span(left, w, self.cell_w);
        let (cy, chh) = Self::span(top, h, self.cell_h);
        for y in cy.max(0)..(cy + chh).min(field.h as i32) {
            for x in cx.max(0)..(cx + cw).min(field.w as i32) {
                let (px, py) = (field.x + x as u16, field.y + y as u16);
                let mut style = style;
                if keep_bg {
                    if let Some(under) = fb.get(px, py) {
                        style.bg = under.style.bg;
                    }
                }
                fb.put_char(px, py, ch, style);
            }
        }
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        game: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let label = CellStyle::new(TEXT_FG, BLACK).bold();
        let value = CellStyle::new(Rgb::new(255, 230, 120), BLACK).bold();

        let mut x = start_x + 2;
        fb.put_str(x, start_y, " Score: ", label);
        x += 8;
        x += fb.put_u32(x, start_y, game.score(), value);
        fb.put_char(x, start_y, ' ', label);

        // "High" right-aligned on the same border line.
        let high = game.high_score();
        let digits = digit_count(high);
        let high_x = start_x
            .saturating_add(frame_w)
            .saturating_sub(2 + 7 + digits + 1);
        if high_x > x + 1 {
            fb.put_str(high_x, start_y, " High: ", label);
            let n = fb.put_u32(high_x + 7, start_y, high, value);
            fb.put_char(high_x + 7 + n, start_y, ' ', label);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(TEXT_FG, BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

        let entries = [("MOVE", "arrows/WASD"), ("QUIT", "q / Esc")];
        let mut y = start_y + 1;
        for (name, keys) in entries {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, keys, value);
            y = y.saturating_add(3);
        }
    }
}

fn row_bg(kind: RowKind) -> Rgb {
    match kind {
        RowKind::Safe => SAFE_BG,
        RowKind::Road => ROAD_BG,
        RowKind::Water => WATER_BG,
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Boxed text panel centred over the frame.
///
/// `number` appends a value to the given line without allocating.
fn draw_panel(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    lines: &[(&str, CellStyle)],
    number: Option<(usize, u32)>,
) {
    let text_w = lines
        .iter()
        .map(|(s, _)| s.chars().count() as u16)
        .max()
        .unwrap_or(0)
        .max(12);
    let panel_w = text_w + 4;
    let panel_h = lines.len() as u16 + 2;
    let px = start_x.saturating_add(frame_w.saturating_sub(panel_w) / 2);
    let py = start_y.saturating_add(frame_h.saturating_sub(panel_h) / 2);

    let frame = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
    fb.fill_rect(px, py, panel_w, panel_h, ' ', frame);
    draw_border(fb, px, py, panel_w, panel_h, frame);

    for (i, (text, style)) in lines.iter().enumerate() {
        let y = py + 1 + i as u16;
        match number {
            Some((line, value)) if line == i => {
                let w = text.chars().count() as u16 + digit_count(value);
                let x = px.saturating_add(panel_w.saturating_sub(w) / 2);
                fb.put_str(x, y, text, *style);
                fb.put_u32(x + text.chars().count() as u16, y, value, style.bold());
            }
            _ => fb.put_str_centered(px, panel_w, y, text, *style),
        }
    }
}
