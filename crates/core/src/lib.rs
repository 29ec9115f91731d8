//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on the terminal, input devices or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function or a method on [`GameState`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`arena`]: the playfield grid, blocking queries and row sweeping
//! - [`shapes`]: the seven canonical shape matrices
//! - [`piece`]: the active piece, collision and merging
//! - [`rotation`]: in-place matrix rotation with a horizontal wall kick
//! - [`clock`]: drop timer and frame clock
//! - [`scoring`]: points for cleared rows
//! - [`rng`]: seeded uniform piece selection
//! - [`config`]: validated game configuration
//! - [`game_state`]: the state machine tying it all together
//! - [`snapshot`]: read-only export for renderers
//!
//! # Example
//!
//! ```
//! use arena_tetris_core::GameState;
//! use arena_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::SoftDrop);
//!
//! // A second's worth of frames triggers one automatic drop step.
//! let mut dropped = 0;
//! for _ in 0..63 {
//!     if game.tick(16) {
//!         dropped += 1;
//!     }
//! }
//! assert_eq!(dropped, 1);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. The drop timer fires once the accumulated time reaches
//! the drop interval (1000ms by default), and at most once per call.

pub mod arena;
pub mod clock;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use arena_tetris_types as types;

// Re-export commonly used types for convenience
pub use arena::Arena;
pub use clock::{DropTimer, FrameClock};
pub use config::{ConfigError, GameConfig};
pub use game_state::{DropOutcome, GameState, LockEvent};
pub use piece::{collides, merge, ActivePiece};
pub use rng::{PiecePicker, SimpleRng};
pub use rotation::{rotate_matrix, rotate_with_kick};
pub use scoring::score_for_sweep;
pub use shapes::{shape_for, ShapeMatrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
