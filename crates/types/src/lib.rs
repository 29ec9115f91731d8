//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Arena Dimensions
//!
//! The default playfield is the classic browser-game size:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! Both can be overridden at startup within `MIN_ARENA_DIM..=MAX_ARENA_DIM`.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Time between automatic drop steps |
//!
//! # Cell Values
//!
//! Cells are plain `u8` values: `0` is empty, `1..=7` identifies the piece kind
//! (and therefore its color). See [`PieceKind::cell`].
//!
//! # Examples
//!
//! ```
//! use arena_tetris_types::{GameAction, PieceKind, RotationDirection, ARENA_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.cell(), 7);
//! assert_eq!(PieceKind::from_cell(7), Some(PieceKind::T));
//!
//! assert_eq!(RotationDirection::Clockwise.opposite(), RotationDirection::CounterClockwise);
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! assert_eq!(ARENA_WIDTH, 12);
//! ```

/// Default arena width in cells (12 columns)
pub const ARENA_WIDTH: u16 = 12;

/// Default arena height in cells (20 rows)
pub const ARENA_HEIGHT: u16 = 20;

/// Smallest accepted arena dimension (the I piece is 4 cells long)
pub const MIN_ARENA_DIM: u16 = 4;

/// Largest accepted arena dimension
pub const MAX_ARENA_DIM: u16 = 64;

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Default time between automatic drop steps (1000ms = 1 row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// Largest matrix side of any shape (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// A cell on the arena or in a shape matrix
///
/// - `0`: Empty cell
/// - `1..=7`: Occupied by the piece kind with that color index
pub type Cell = u8;

/// The seven piece kinds
///
/// Color indices are fixed per kind:
/// - **I**: 1
/// - **L**: 2
/// - **J**: 3
/// - **O**: 4
/// - **Z**: 5
/// - **S**: 6
/// - **T**: 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    Z,
    S,
    T,
}

impl PieceKind {
    /// All kinds, in spawn-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
    ];

    /// Color index stored in the arena for this kind
    pub fn cell(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::O => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
            PieceKind::T => 7,
        }
    }

    /// Map a stored cell value back to its kind
    ///
    /// Returns `None` for empty cells and for values outside `1..=7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_cell(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_cell(0), None);
    /// assert_eq!(PieceKind::from_cell(8), None);
    /// ```
    pub fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::L),
            3 => Some(PieceKind::J),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Upper-case letter, used by the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Direction of a 90° rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// The direction that undoes this one
    pub fn opposite(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Commands that can be applied to the game state
///
/// Each command is resolved synchronously, including its own collision check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (locks it if it cannot move)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl GameAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
        }
    }
}
