//! Arena tests - blocking queries and row sweeping

use arena_tetris::core::Arena;
use arena_tetris::types::{ARENA_HEIGHT, ARENA_WIDTH};

#[test]
fn test_arena_new_empty() {
    let arena = Arena::new(ARENA_WIDTH, ARENA_HEIGHT);
    assert_eq!(arena.width(), ARENA_WIDTH);
    assert_eq!(arena.height(), ARENA_HEIGHT);

    for y in 0..ARENA_HEIGHT as i32 {
        for x in 0..ARENA_WIDTH as i32 {
            assert_eq!(arena.get(x, y), Some(0), "cell ({}, {}) should be empty", x, y);
        }
    }
    assert_eq!(arena.rows().count(), ARENA_HEIGHT as usize);
}

#[test]
fn test_arena_blocking_rules() {
    let mut arena = Arena::new(12, 20);
    arena.set(3, 10, 7);

    // Walls and floor block.
    assert!(arena.is_blocked(-1, 5));
    assert!(arena.is_blocked(12, 5));
    assert!(arena.is_blocked(5, 20));

    // Above the top is open air, unless it is also past a wall.
    assert!(!arena.is_blocked(5, -1));
    assert!(!arena.is_blocked(0, -3));
    assert!(arena.is_blocked(-1, -1));

    assert!(arena.is_blocked(3, 10));
    assert!(!arena.is_blocked(4, 10));
}

#[test]
fn test_sweep_single_bottom_row() {
    let mut arena = Arena::from_rows(&[
        vec![0, 0, 0, 0],
        vec![0, 2, 0, 0],
        vec![1, 1, 1, 1],
    ]);

    assert_eq!(arena.sweep(), 1);
    assert_eq!(
        arena.to_rows(),
        vec![vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 2, 0, 0]]
    );
}

#[test]
fn test_sweep_non_adjacent_rows() {
    let mut arena = Arena::from_rows(&[
        vec![3, 0, 0, 0],
        vec![5, 5, 5, 5],
        vec![0, 4, 0, 0],
        vec![6, 6, 6, 6],
    ]);

    assert_eq!(arena.sweep(), 2);
    assert_eq!(
        arena.to_rows(),
        vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![3, 0, 0, 0],
            vec![0, 4, 0, 0],
        ]
    );
}

#[test]
fn test_sweep_includes_top_row() {
    let mut arena = Arena::from_rows(&[vec![1, 1, 1, 1], vec![0, 0, 0, 0], vec![0, 0, 0, 0]]);
    assert_eq!(arena.sweep(), 1);
    assert!(arena.is_empty());
}

#[test]
fn test_sweep_without_full_rows_is_noop() {
    let rows = vec![vec![0, 0, 0, 0], vec![1, 1, 0, 1], vec![1, 1, 1, 0]];
    let mut arena = Arena::from_rows(&rows);
    assert_eq!(arena.sweep(), 0);
    assert_eq!(arena.to_rows(), rows);
}

#[test]
fn test_sweep_whole_arena() {
    let mut arena = Arena::new(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            arena.set(x, y, 2);
        }
    }
    assert_eq!(arena.sweep(), 4);
    assert!(arena.is_empty());
}

#[test]
fn test_clear_resets_every_cell() {
    let mut arena = Arena::new(12, 20);
    arena.set(0, 0, 1);
    arena.set(11, 19, 7);
    arena.clear();
    assert!(arena.is_empty());
}
