use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossquest::core::{GameRng, GameState, Level, Session};
use crossquest::term::{FrameBuffer, GameView, ViewEffects, Viewport};
use crossquest::types::{Direction, GameAction, LEVEL_ROWS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345, Session::default());
    state.apply_action(GameAction::Play);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_tick_while_moving(c: &mut Criterion) {
    c.bench_function("tick_with_move", |b| {
        b.iter_batched(
            || {
                let mut state = GameState::new(12345, Session::default());
                state.apply_action(GameAction::Play);
                state.apply_action(GameAction::Move(Direction::Left));
                state
            },
            |mut state| {
                for _ in 0..10 {
                    state.tick(black_box(16));
                }
                state
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_generate_rows(c: &mut Criterion) {
    let mut rng = GameRng::new(12345);

    c.bench_function("generate_level", |b| {
        b.iter(|| {
            let mut level = Level::new();
            level.generate_rows(black_box(LEVEL_ROWS), &mut rng);
            level
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345, Session::default());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(100, 30);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            view.render_into(
                black_box(&state),
                Viewport::new(100, 30),
                ViewEffects::default(),
                &mut fb,
            );
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_tick_while_moving,
    bench_generate_rows,
    bench_render
);
criterion_main!(benches);
