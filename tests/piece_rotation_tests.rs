//! Shape, collision and rotation tests through the public API

use arena_tetris::core::{
    collides, merge, rotate_matrix, rotate_with_kick, shape_for, ActivePiece, Arena,
};
use arena_tetris::types::{PieceKind, RotationDirection};

fn piece(kind: PieceKind, x: i32, y: i32) -> ActivePiece {
    ActivePiece::with_matrix(kind, shape_for(kind), x, y)
}

#[test]
fn test_spawn_is_centered_at_top() {
    for kind in PieceKind::ALL {
        let p = ActivePiece::spawn(kind, 12);
        let size = shape_for(kind).size() as i32;
        assert_eq!(p.y, 0);
        assert_eq!(p.x, 6 - size / 2, "{:?}", kind);
        assert!(!collides(&Arena::new(12, 20), &p));
    }
}

#[test]
fn test_shape_copies_are_independent() {
    let mut a = shape_for(PieceKind::T);
    rotate_matrix(&mut a, RotationDirection::Clockwise);
    assert_ne!(a, shape_for(PieceKind::T));
    assert_eq!(shape_for(PieceKind::T), shape_for(PieceKind::T));
}

#[test]
fn test_clockwise_then_counter_clockwise_is_identity() {
    for kind in PieceKind::ALL {
        let mut m = shape_for(kind);
        rotate_matrix(&mut m, RotationDirection::Clockwise);
        rotate_matrix(&mut m, RotationDirection::CounterClockwise);
        assert_eq!(m, shape_for(kind), "{:?}", kind);
    }
}

#[test]
fn test_collision_with_walls_floor_and_cells() {
    let mut arena = Arena::new(12, 20);

    // O at the bottom-right corner fits; one step further does not.
    assert!(!collides(&arena, &piece(PieceKind::O, 10, 18)));
    assert!(collides(&arena, &piece(PieceKind::O, 11, 18)));
    assert!(collides(&arena, &piece(PieceKind::O, 10, 19)));
    assert!(collides(&arena, &piece(PieceKind::O, -1, 0)));

    // Empty matrix cells never collide: the I bar's column 0 may hang off the left wall.
    assert!(!collides(&arena, &piece(PieceKind::I, -1, 0)));

    // Partly above the top is fine.
    assert!(!collides(&arena, &piece(PieceKind::T, 4, -1)));

    arena.set(5, 10, 3);
    assert!(collides(&arena, &piece(PieceKind::O, 4, 9)));
    assert!(!collides(&arena, &piece(PieceKind::O, 6, 9)));
}

#[test]
fn test_merge_writes_piece_color() {
    let mut arena = Arena::new(12, 20);
    let p = piece(PieceKind::S, 3, 17);
    merge(&mut arena, &p);

    // S: [[0,c,c],[c,c,0]]
    let c = PieceKind::S.cell();
    assert_eq!(arena.get(4, 17), Some(c));
    assert_eq!(arena.get(5, 17), Some(c));
    assert_eq!(arena.get(3, 18), Some(c));
    assert_eq!(arena.get(4, 18), Some(c));
    assert_eq!(arena.get(3, 17), Some(0));
    assert!(collides(&arena, &p));
}

#[test]
fn test_rotation_in_open_space_needs_no_kick() {
    let arena = Arena::new(12, 20);
    let mut p = piece(PieceKind::J, 5, 5);
    assert_eq!(rotate_with_kick(&arena, &mut p, RotationDirection::Clockwise), Some(0));
    assert_eq!(p.x, 5);
}

#[test]
fn test_rotation_kicks_off_left_wall() {
    let arena = Arena::new(12, 20);
    let mut p = piece(PieceKind::T, 0, 5);

    // Pointing right leaves column 0 empty, so it can sit at x = -1.
    assert_eq!(rotate_with_kick(&arena, &mut p, RotationDirection::Clockwise), Some(0));
    p.x = -1;
    assert!(!collides(&arena, &p));

    // Pointing down needs column 0 again; the first kick (+1) fits.
    assert_eq!(rotate_with_kick(&arena, &mut p, RotationDirection::Clockwise), Some(1));
    assert_eq!(p.x, 0);
    assert!(!collides(&arena, &p));
}

#[test]
fn test_rotation_fails_in_narrow_well() {
    let arena = Arena::new(3, 20);
    let mut p = piece(PieceKind::I, 0, 5);
    let before = p;

    assert_eq!(rotate_with_kick(&arena, &mut p, RotationDirection::Clockwise), None);
    assert_eq!(p, before);
}
