use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use arena_tetris::core::{GameSnapshot, GameState};
use arena_tetris::term::{FrameBuffer, GameView, Viewport};
use arena_tetris::types::{GameAction, FRAME_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

// Tests in this file share the counter, so there is only one.
fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn frame_loop_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut gs = GameState::new(1);
    let mut snap = GameSnapshot::default();

    // Warm-up (snapshot buffer, framebuffer, one full episode so every lock,
    // spawn and reset path has run once).
    while gs.episode_id() == 0 {
        gs.soft_drop();
    }
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..2_000u32 {
            let action = match i % 5 {
                0 => GameAction::MoveLeft,
                1 => GameAction::RotateCw,
                2 => GameAction::MoveRight,
                3 => GameAction::RotateCcw,
                _ => GameAction::SoftDrop,
            };
            gs.apply_action(action);
            gs.tick(FRAME_MS);

            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
