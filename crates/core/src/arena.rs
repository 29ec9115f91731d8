//! Arena module - the playfield grid of locked cells
//!
//! The arena is a `width x height` grid chosen at construction (12x20 by default).
//! Uses a flat row-major buffer; the dimensions never change afterwards.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Rows above the top edge (y < 0) are open space: pieces may hang there while
//! they spawn or rotate. The left, right and bottom edges block.

use crate::types::{Cell, EMPTY};

/// The playfield - flat row-major cell storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Arena {
    /// Create a new empty arena
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        debug_assert!(cell <= 7, "cell value {} out of range", cell);
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether a piece cell may not occupy (x, y)
    ///
    /// Blocked: left of column 0, right of the last column, at or below the
    /// floor, or any nonzero cell. Open: an empty cell, or anywhere above the top
    /// row within the columns.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return true;
        }
        if y < 0 {
            return false;
        }
        match self.get(x, y) {
            Some(cell) => cell != EMPTY,
            None => true,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.row(y) {
            Some(row) => row.iter().all(|&cell| cell != EMPTY),
            None => false,
        }
    }

    /// Borrow one row
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Remove every full row and return how many were removed
    ///
    /// Scans bottom to top. Each full row is taken out, the rows above it shift
    /// down by one and a fresh empty row appears at the top. After a removal the
    /// same index is examined again, since it now holds the row that was above.
    pub fn sweep(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut y = self.height as usize;

        while y > 0 {
            let row = y - 1;
            if !self.is_row_full(row) {
                y -= 1;
                continue;
            }

            // Shift rows [0, row) down by one; copy_within handles the overlap.
            self.cells.copy_within(0..row * width, width);
            self.cells[..width].fill(EMPTY);
            cleared += 1;
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire arena
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// Build an arena from rows of cells (top to bottom)
    ///
    /// Panics when the rows are ragged.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        assert!(rows.iter().all(|r| r.len() == width), "ragged rows");

        let mut arena = Self::new(width as u16, height as u16);
        for (y, row) in rows.iter().enumerate() {
            let start = y * width;
            arena.cells[start..start + width].copy_from_slice(row);
        }
        arena
    }

    /// Convert to rows of cells (top to bottom)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}
