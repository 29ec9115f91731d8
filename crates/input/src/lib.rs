//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. There is no
//! queue and no auto-repeat logic here: every press (and every terminal repeat
//! event) maps to exactly one command, which the caller applies immediately.

pub mod map;

pub use arena_tetris_types as types;

pub use map::{handle_key_event, should_quit};
