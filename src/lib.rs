//! Arena Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, tests and
//! benches can use `arena_tetris::{core,input,term,types}`.

pub use arena_tetris_core as core;
pub use arena_tetris_input as input;
pub use arena_tetris_term as term;
pub use arena_tetris_types as types;
