//! Active piece, collision and placement
//!
//! `collides` is the single source of truth for movement legality: every move,
//! drop, rotation and spawn goes through it. `merge` is the only way cells
//! become part of the arena.

use crate::{shape_for, Arena, ShapeMatrix};
use crate::types::PieceKind;

/// The currently falling piece
///
/// `x`/`y` is the arena position of the matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Fresh piece of `kind`, centered over an arena `arena_width` columns wide
    pub fn spawn(kind: PieceKind, arena_width: u16) -> Self {
        let matrix = shape_for(kind);
        Self {
            kind,
            matrix,
            x: spawn_x(arena_width, matrix.size()),
            y: 0,
        }
    }

    /// Place a matrix at an explicit position
    pub fn with_matrix(kind: PieceKind, matrix: ShapeMatrix, x: i32, y: i32) -> Self {
        Self { kind, matrix, x, y }
    }

    /// Arena coordinates and values of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.matrix
            .occupied()
            .into_iter()
            .map(move |(mx, my, v)| (self.x + mx, self.y + my, v))
    }
}

/// Horizontal spawn column: half the arena minus half the matrix, truncated
pub fn spawn_x(arena_width: u16, matrix_size: usize) -> i32 {
    (arena_width as i32 / 2) - (matrix_size as i32 / 2)
}

/// True when any occupied piece cell hits a wall, the floor or a locked cell
///
/// Cells above the top edge never collide.
pub fn collides(arena: &Arena, piece: &ActivePiece) -> bool {
    piece.cells().any(|(x, y, _)| arena.is_blocked(x, y))
}

/// Write the piece's occupied cells into the arena
///
/// Cells above the top edge have nowhere to go and are dropped.
pub fn merge(arena: &mut Arena, piece: &ActivePiece) {
    for (x, y, v) in piece.cells() {
        arena.set(x, y, v);
    }
}
