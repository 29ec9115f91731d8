use criterion::{black_box, criterion_group, criterion_main, Criterion};
use arena_tetris::core::{rotate_with_kick, Arena, GameSnapshot, GameState};
use arena_tetris::term::{GameView, Viewport};
use arena_tetris::types::{RotationDirection, FRAME_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(FRAME_MS));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut arena = Arena::new(12, 20);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..12 {
                    arena.set(x, y, 1);
                }
            }
            black_box(arena.sweep());
        })
    });
}

fn bench_drop_and_lock(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    // Covers falling, locking, spawning and the occasional game-over reset.
    c.bench_function("soft_drop", |b| {
        b.iter(|| {
            black_box(state.soft_drop());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut dx = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !state.move_piece(dx) {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let arena = Arena::new(12, 20);
    let mut piece = *GameState::new(12345).active();

    c.bench_function("rotate_with_kick", |b| {
        b.iter(|| {
            black_box(rotate_with_kick(&arena, &mut piece, RotationDirection::Clockwise));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = view.render(&state.snapshot(), viewport);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_sweep,
    bench_drop_and_lock,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
