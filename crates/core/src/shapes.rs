//! Shapes module - the seven canonical piece matrices
//!
//! Every shape is stored as its minimal bounding square padded with empty
//! cells: I is 4x4, O is 2x2, the other five are 3x3. Squareness matters
//! because rotation transposes the matrix in place.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, EMPTY, MAX_SHAPE_SIZE};

/// One occupied cell of a shape: local (x, y) and its value
pub type ShapeCell = (i32, i32, Cell);

/// Square cell matrix of side `size` (2..=4), stored in a fixed 4x4 buffer
///
/// Cells outside `size x size` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    size: u8,
}

impl ShapeMatrix {
    /// Build a matrix from square rows
    ///
    /// Panics when the rows are not square or larger than 4x4; shape literals
    /// are fixed at compile time, so either is a programming error.
    pub fn from_rows<const N: usize>(rows: [[Cell; N]; N]) -> Self {
        assert!((1..=MAX_SHAPE_SIZE).contains(&N), "shape side {} out of range", N);
        let mut cells = [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..N].copy_from_slice(row);
        }
        Self {
            cells,
            size: N as u8,
        }
    }

    /// Side length of the square
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Cell at local (x, y); None outside the square
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size() || y >= self.size() {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Rows of the square, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let n = self.size();
        self.cells[..n].iter().map(move |row| &row[..n])
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> ArrayVec<ShapeCell, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }> {
        let mut out = ArrayVec::new();
        for (y, row) in self.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell != EMPTY {
                    out.push((x as i32, y as i32, cell));
                }
            }
        }
        out
    }

    /// Swap `[x][y]` and `[y][x]` for every x < y
    pub(crate) fn transpose(&mut self) {
        let n = self.size();
        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = tmp;
            }
        }
    }

    /// Mirror horizontally
    pub(crate) fn reverse_each_row(&mut self) {
        let n = self.size();
        for row in &mut self.cells[..n] {
            row[..n].reverse();
        }
    }

    /// Mirror vertically
    pub(crate) fn reverse_row_order(&mut self) {
        let n = self.size();
        self.cells[..n].reverse();
    }
}

/// Fresh copy of the canonical matrix for `kind`
///
/// The copy is independent: callers may rotate it freely.
pub fn shape_for(kind: PieceKind) -> ShapeMatrix {
    let c = kind.cell();
    match kind {
        PieceKind::I => ShapeMatrix::from_rows([
            [0, c, 0, 0],
            [0, c, 0, 0],
            [0, c, 0, 0],
            [0, c, 0, 0],
        ]),
        PieceKind::L => ShapeMatrix::from_rows([[0, c, 0], [0, c, 0], [0, c, c]]),
        PieceKind::J => ShapeMatrix::from_rows([[0, c, 0], [0, c, 0], [c, c, 0]]),
        PieceKind::O => ShapeMatrix::from_rows([[c, c], [c, c]]),
        PieceKind::Z => ShapeMatrix::from_rows([[c, c, 0], [0, c, c], [0, 0, 0]]),
        PieceKind::S => ShapeMatrix::from_rows([[0, c, c], [c, c, 0], [0, 0, 0]]),
        PieceKind::T => ShapeMatrix::from_rows([[0, c, 0], [c, c, c], [0, 0, 0]]),
    }
}
