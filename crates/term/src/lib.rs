//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a plain framebuffer that is then flushed to a crossterm
//! backend, diffing against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep rendering pure up to the final flush
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use arena_tetris_core as core;
pub use arena_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, AnchorY, GameView, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
