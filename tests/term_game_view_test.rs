use crossquest::core::{GameState, Session};
use crossquest::term::{
    AnchorY, FrameBuffer, GameView, Rgb, ViewEffects, Viewport, MAX_CELL_SIZE,
};
use crossquest::types::{DeathCause, GameAction, RowKind, RAIN_ALPHABET};

// Default view: 3x1 cells per grid cell, so the field is 60x15 and the frame 62x17.
const FRAME_W: u16 = 62;
const FRAME_H: u16 = 17;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1, Session::default());
    let fb = GameView::default().render(&state, Viewport::new(FRAME_W, FRAME_H));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(FRAME_W - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, FRAME_H - 1).unwrap().ch, '└');
    assert_eq!(fb.get(FRAME_W - 1, FRAME_H - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_field_size_follows_cell_size() {
    assert_eq!(GameView::default().field_size(), (60, 15));
    assert_eq!(GameView::new(2, 2).field_size(), (40, 30));
    // Zero is clamped to one character.
    assert_eq!(GameView::new(0, 0).field_size(), (20, 15));
}

#[test]
fn term_view_oversized_cells_are_clamped() {
    let view = GameView::new(5000, 5000);
    assert_eq!(
        view.field_size(),
        (20 * MAX_CELL_SIZE, 15 * MAX_CELL_SIZE)
    );

    let state = GameState::new(1, Session::default());
    let fb = view.render(&state, Viewport::new(FRAME_W, FRAME_H));
    assert_eq!(fb.width(), FRAME_W);
}

#[test]
fn term_view_draws_player_at_start_cell() {
    let mut state = GameState::new(1, Session::default());
    state.apply_action(GameAction::Play);
    let fb = GameView::default().render(&state, Viewport::new(FRAME_W, FRAME_H));

    // Player centre x=420 -> columns 30..32 of the field; bottom visible row 14.
    let y = 1 + 14;
    assert_eq!(fb.get(1 + 30, y).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 31, y).unwrap().ch, '█');
    assert_ne!(fb.get(1 + 29, y).unwrap().ch, '█');
}

#[test]
fn term_view_shows_title_only_before_play() {
    let mut state = GameState::new(1, Session::default());
    let view = GameView::default();
    let vp = Viewport::new(FRAME_W, FRAME_H);

    let text = screen_text(&view.render(&state, vp));
    assert!(text.contains("CrossQuest"));
    assert!(text.contains("Play"));

    state.apply_action(GameAction::Play);
    let text = screen_text(&view.render(&state, vp));
    assert!(!text.contains("CrossQuest"));
    assert!(!text.contains("Play"));
}

#[test]
fn term_view_hud_shows_score_and_high() {
    let state = GameState::new(1, Session::new(7));
    let fb = GameView::default().render(&state, Viewport::new(FRAME_W, FRAME_H));

    let top = row_text(&fb, 0);
    assert!(top.contains("Score: 0"), "{top}");
    assert!(top.contains("High: 7"), "{top}");
}

#[test]
fn term_view_game_over_panel() {
    let mut state = GameState::new(1, Session::default());
    state.apply_action(GameAction::Play);
    state.player_hit(DeathCause::Bug);

    let text = screen_text(&GameView::default().render(&state, Viewport::new(FRAME_W, FRAME_H)));
    assert!(text.contains("Congratulations!"));
    assert!(text.contains("Score: 0"));
    assert!(text.contains("Try Again"));
    assert!(text.contains('X'), "dead player marker");
}

#[test]
fn term_view_draws_rain_over_water_rows() {
    let state = (0..200)
        .map(|seed| GameState::new(seed, Session::default()))
        .find(|s| {
            s.level()
                .rows()
                .iter()
                .take(15)
                .any(|r| r.kind == RowKind::Water)
        })
        .expect("some seed has a visible water row");
    let water = state
        .level()
        .rows()
        .iter()
        .take(15)
        .find(|r| r.kind == RowKind::Water)
        .unwrap()
        .index as u16;

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&state, Viewport::new(FRAME_W, 40));
    let row = row_text(&fb, 1 + water);
    assert!(row.chars().any(|c| RAIN_ALPHABET.contains(&c)), "{row}");
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let state = GameState::new(1, Session::default());
    let view = GameView::default();

    let narrow = screen_text(&view.render(&state, Viewport::new(FRAME_W, FRAME_H)));
    assert!(!narrow.contains("MOVE"));

    let wide = screen_text(&view.render(&state, Viewport::new(FRAME_W + 40, FRAME_H)));
    assert!(wide.contains("MOVE"));
    assert!(wide.contains("QUIT"));
}

#[test]
fn term_view_shake_offsets_frame() {
    let state = GameState::new(1, Session::default());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let effects = ViewEffects {
        shake: (2, 0),
        brightness: 1.0,
    };
    view.render_into(&state, Viewport::new(FRAME_W + 4, FRAME_H), effects, &mut fb);

    // Centred start is column 2; the shake moves it to 4.
    assert_eq!(fb.get(4, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_fade_darkens_everything() {
    let state = GameState::new(1, Session::default());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let effects = ViewEffects {
        shake: (0, 0),
        brightness: 0.0,
    };
    view.render_into(&state, Viewport::new(FRAME_W, FRAME_H), effects, &mut fb);

    let black = Rgb::new(0, 0, 0);
    assert!(fb
        .cells()
        .iter()
        .all(|c| c.style.fg == black && c.style.bg == black));
}

#[test]
fn term_view_top_anchor() {
    let state = GameState::new(1, Session::default());
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&state, Viewport::new(FRAME_W, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
