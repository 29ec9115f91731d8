use crate::piece::ActivePiece;
use crate::types::{Cell, PieceKind, EMPTY};
use crate::ShapeMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Arena coordinates and values of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.matrix
            .occupied()
            .into_iter()
            .map(move |(mx, my, v)| (self.x + mx, self.y + my, v))
    }
}

/// Read-only export of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major locked cells (`y * width + x`)
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.episode_id = 0;
        self.piece_id = 0;
    }

    /// Locked cell at (x, y); None out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Locked cell with the active piece drawn over it
    pub fn composed_cell(&self, x: i32, y: i32) -> Option<Cell> {
        let locked = self.cell(x, y)?;
        let over = self
            .active
            .as_ref()
            .and_then(|a| a.cells().find(|&(ax, ay, _)| ax == x && ay == y));
        Some(over.map(|(_, _, v)| v).unwrap_or(locked))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }
}
