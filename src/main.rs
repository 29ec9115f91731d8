//! Terminal arena runner (default binary).
//!
//! Polls crossterm for key presses, applies each one to the game immediately,
//! advances the drop timer by the real time elapsed since the previous frame
//! and redraws through the framebuffer renderer.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use arena_tetris::core::{FrameClock, GameConfig, GameSnapshot, GameState};
use arena_tetris::input::{handle_key_event, should_quit};
use arena_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use arena_tetris::types::{ARENA_HEIGHT, ARENA_WIDTH, DROP_INTERVAL_MS, FRAME_MS};

/// Falling-block arena game in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "arena-tetris",
    version,
    about = "Falling-block arena game in the terminal. Fill a row to clear it and score a point.",
    long_about = "Pieces fall into a fixed arena one row per drop interval. A completely \
        filled row is removed and everything above it shifts down. When a new piece \
        cannot spawn the arena is wiped and the score starts over.\n\n\
        CONTROLS:\n  Left/Right (h/l, a/d)  Move    Up (k, w)  Rotate CW   z/y  Rotate CCW\n  \
        Down (j, s)            Soft drop                           q / Esc / Ctrl-C  Quit"
)]
struct Args {
    /// Arena width in cells.
    #[arg(long, default_value_t = ARENA_WIDTH, value_name = "COLS")]
    width: u16,

    /// Arena height in cells.
    #[arg(long, default_value_t = ARENA_HEIGHT, value_name = "ROWS")]
    height: u16,

    /// Milliseconds between automatic drop steps.
    #[arg(long, default_value_t = DROP_INTERVAL_MS, value_name = "MS")]
    drop_interval_ms: u32,

    /// Piece RNG seed. Derived from the system clock if not set.
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Write logs to this file. Nothing is logged without it, since the
    /// terminal belongs to the game screen.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "arena_tetris_core=debug").
    #[arg(long, default_value = "info", value_name = "FILTER")]
    log_level: String,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            drop_interval_ms: self.drop_interval_ms,
            seed: self.seed.unwrap_or_else(clock_seed),
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = args.log_file.as_ref() else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level)
            .with_context(|| format!("invalid log filter {:?}", args.log_level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    // Validate before touching the terminal so errors print normally.
    let config = args.game_config();
    let game = GameState::with_config(config).context("invalid game configuration")?;
    info!(
        width = config.width,
        height = config.height,
        drop_interval_ms = config.drop_interval_ms,
        seed = config.seed,
        "starting game"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let start = Instant::now();
    let mut clock = FrameClock::new();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until the next frame.
        let since_frame = start.elapsed().saturating_sub(Duration::from_millis(clock.last_ms()));
        let timeout = frame.saturating_sub(since_frame);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let now_ms = start.elapsed().as_millis() as u64;
        let dt = clock.advance(now_ms);
        game.tick(dt);
    }
}
