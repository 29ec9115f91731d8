//! Rotation module - in-place matrix rotation with a horizontal wall kick
//!
//! A 90° turn of a square matrix is a transpose followed by a mirror:
//! mirror each row for clockwise, mirror the row order for counter-clockwise.
//!
//! When the turned piece collides, the kick search nudges it sideways by
//! applying offsets 1, -2, 3, -4, ... to x in turn, so the tested positions are
//! +1, -1, +2, -2, ... from the original column. Offsets never exceed the
//! matrix width. If nothing fits the turn is undone.

use crate::piece::{collides, ActivePiece};
use crate::types::RotationDirection;
use crate::{Arena, ShapeMatrix};

/// Rotate a square matrix 90° in place
pub fn rotate_matrix(matrix: &mut ShapeMatrix, direction: RotationDirection) {
    matrix.transpose();
    match direction {
        RotationDirection::Clockwise => matrix.reverse_each_row(),
        RotationDirection::CounterClockwise => matrix.reverse_row_order(),
    }
}

/// Rotate the piece, kicking it sideways if needed
///
/// Returns the net horizontal kick applied (0 when the plain turn fits), or
/// `None` when no position fits; in that case the piece is left untouched.
pub fn rotate_with_kick(
    arena: &Arena,
    piece: &mut ActivePiece,
    direction: RotationDirection,
) -> Option<i32> {
    let original_x = piece.x;
    rotate_matrix(&mut piece.matrix, direction);

    let bound = piece.matrix.size() as i32;
    let mut offset: i32 = 1;
    while collides(arena, piece) {
        if offset.abs() > bound {
            rotate_matrix(&mut piece.matrix, direction.opposite());
            piece.x = original_x;
            return None;
        }
        piece.x += offset;
        offset = -(offset + offset.signum());
    }

    Some(piece.x - original_x)
}
