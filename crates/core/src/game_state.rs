//! Game state module - manages the complete game state
//!
//! This module ties together all core components: arena, shapes, rotation,
//! RNG, timing and scoring. It owns the single active piece and drives its
//! lifecycle:
//!
//! ```text
//! Falling --(drop step collides)--> Locking --> Locked (merge, sweep, score)
//!    ^                                              |
//!    +---------------- Spawning <-------------------+
//!                         |
//!                         +--(spawn collides)--> GameOver (arena and score reset)
//! ```
//!
//! Everything between "Locking" and the next "Falling" happens inside a
//! single call; callers see the result as a [`DropOutcome`].

use tracing::{debug, info, trace};

use crate::clock::DropTimer;
use crate::config::{ConfigError, GameConfig};
use crate::piece::{collides, merge, ActivePiece};
use crate::rng::PiecePicker;
use crate::rotation::rotate_with_kick;
use crate::scoring::score_for_sweep;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Arena;

/// Result of one drop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece locked and the next one spawned
    Locked { lines_cleared: u32 },
    /// The piece locked, the next one did not fit and the game restarted
    GameOver { lines_cleared: u32 },
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    arena: Arena,
    active: ActivePiece,
    picker: PiecePicker,
    drop_timer: DropTimer,
    score: u32,
    /// Rows cleared in the current episode.
    lines: u32,
    /// Monotonic episode id (increments on every game-over reset).
    episode_id: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new default-sized game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::with_seed(seed))
    }

    /// Create a game from a configuration, validating it first
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let mut picker = PiecePicker::new(config.seed);
        let kind = picker.next();
        let active = ActivePiece::spawn(kind, config.width);
        trace!(?kind, x = active.x, "spawned first piece");

        Self {
            arena: Arena::new(config.width, config.height),
            active,
            picker,
            drop_timer: DropTimer::new(config.drop_interval_ms),
            score: 0,
            lines: 0,
            episode_id: 0,
            piece_id: 1,
            last_event: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn seed(&self) -> u32 {
        self.picker.seed()
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn drop_timer(&self) -> &DropTimer {
        &self.drop_timer
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.arena.width();
        out.height = self.arena.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.arena.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.lines = self.lines;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the active piece with a fresh random one
    ///
    /// Returns true when the new piece did not fit and the game was reset.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.picker.next();
        self.active = ActivePiece::spawn(kind, self.arena.width());
        self.piece_id = self.piece_id.wrapping_add(1);

        if collides(&self.arena, &self.active) {
            info!(
                episode = self.episode_id,
                score = self.score,
                lines = self.lines,
                "spawn blocked, resetting arena"
            );
            self.arena.clear();
            self.score = 0;
            self.lines = 0;
            self.episode_id = self.episode_id.wrapping_add(1);
            return true;
        }

        trace!(?kind, x = self.active.x, piece_id = self.piece_id, "spawned piece");
        false
    }

    /// Try to move the active piece horizontally
    ///
    /// All or nothing: the piece either moves by exactly `dx` or stays put.
    pub fn move_piece(&mut self, dx: i32) -> bool {
        self.active.x += dx;
        if collides(&self.arena, &self.active) {
            self.active.x -= dx;
            return false;
        }
        true
    }

    /// Try to rotate the active piece, with a horizontal wall kick
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        rotate_with_kick(&self.arena, &mut self.active, direction).is_some()
    }

    /// Move the active piece down one row, locking it if it cannot move
    ///
    /// Used for both the automatic drop and the soft-drop command; either way the
    /// drop timer starts over.
    pub fn soft_drop(&mut self) -> DropOutcome {
        self.drop_timer.reset();

        self.active.y += 1;
        if !collides(&self.arena, &self.active) {
            return DropOutcome::Moved;
        }
        self.active.y -= 1;
        self.lock_piece()
    }

    /// Lock the active piece onto the arena and handle line clears
    fn lock_piece(&mut self) -> DropOutcome {
        merge(&mut self.arena, &self.active);

        let cleared = self.arena.sweep() as u32;
        let gained = score_for_sweep(cleared as usize);
        self.score = self.score.saturating_add(gained);
        self.lines = self.lines.saturating_add(cleared);
        debug!(
            kind = ?self.active.kind,
            x = self.active.x,
            y = self.active.y,
            cleared,
            score = self.score,
            "piece locked"
        );

        let game_over = self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            score_gained: gained,
            game_over,
        });

        if game_over {
            DropOutcome::GameOver {
                lines_cleared: cleared,
            }
        } else {
            DropOutcome::Locked {
                lines_cleared: cleared,
            }
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Main game tick - advance the drop timer and apply gravity
    ///
    /// At most one drop step happens per call no matter how large
    /// `elapsed_ms` is. Returns true when a drop step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.drop_timer.advance(elapsed_ms) {
            return false;
        }
        self.soft_drop();
        true
    }

    /// Apply a game action
    ///
    /// Returns false when a move or rotation was rejected. A soft drop always
    /// succeeds (it either moves or locks).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
            GameAction::RotateCw => self.rotate(RotationDirection::Clockwise),
            GameAction::RotateCcw => self.rotate(RotationDirection::CounterClockwise),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
