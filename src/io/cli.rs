//! Command-line interface: interactive play and autoplayed batches

use crate::engine::Grid;
use crate::game::autoplay::{AutoplaySummary, autoplay};
use crate::game::session::{Session, TurnOutcome, share_message};
use crate::game::sound::{SoundBoard, cues_for};
use crate::io::configuration::{
    DEFAULT_STORE_PATH, GRID_SIZE, GameConfig, SNAPSHOT_CELL_SIZE, SNAPSHOT_GAP,
    SPAWN_TWO_PROBABILITY, TARGET_TILE,
};
use crate::io::error::{GameError, Result};
use crate::io::image::export_grid_as_png;
use crate::io::input::{Command, HELP_TEXT, parse_command};
use crate::io::progress::AutoplayProgress;
use crate::io::render::render_session;
use crate::io::storage::{
    FileStore, KeyValueStore, MemoryStore, load_best, load_muted, save_best, save_muted,
};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "number-puzzle")]
#[command(author, version, about = "Slide and merge numbered tiles to reach the target")]
/// Command-line arguments for the puzzle
// CLI tools commonly need multiple boolean flags for user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Random seed for a reproducible game (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Board side length
    #[arg(long, default_value_t = GRID_SIZE)]
    pub size: usize,

    /// Tile value that wins the game
    #[arg(short, long, default_value_t = TARGET_TILE)]
    pub target: u32,

    /// File holding the best score and mute preference
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Keep the best score in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Mute sounds (the preference is saved)
    #[arg(short, long)]
    pub mute: bool,

    /// Suppress progress output and non-error logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Play this many games with random moves instead of reading commands
    #[arg(short, long, value_name = "GAMES")]
    pub autoplay: Option<usize>,

    /// Print the autoplay summary as JSON
    #[arg(long, requires = "autoplay")]
    pub json: bool,

    /// Save a PNG image of the final board
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,
}

impl Cli {
    /// Validated game rules from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the size or target is out of range
    pub fn game_config(&self) -> Result<GameConfig> {
        GameConfig::new(self.size, self.target, SPAWN_TWO_PROBABILITY)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed from the arguments, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Open the configured store, degrading to memory when disabled
    pub fn open_store(&self) -> Box<dyn KeyValueStore> {
        if self.no_persist {
            Box::new(MemoryStore::new())
        } else {
            Box::new(FileStore::open_or_empty(&self.store))
        }
    }
}

/// Interactive game loop over a command source and a display sink
pub struct GameRunner<S: KeyValueStore> {
    session: Session,
    store: S,
    sounds: SoundBoard,
}

impl<S: KeyValueStore> GameRunner<S> {
    /// Start a game using the best score and mute preference from `store`
    pub fn new(config: GameConfig, seed: u64, mut store: S) -> Self {
        let best = load_best(&mut store);
        let sounds = SoundBoard::new(load_muted(&store));
        info!(seed, best, "starting interactive game");

        Self {
            session: Session::new(config, best, seed),
            store,
            sounds,
        }
    }

    /// Session being played
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Backing store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Whether sounds are muted
    pub const fn is_muted(&self) -> bool {
        self.sounds.is_muted()
    }

    /// Set and persist the mute preference
    pub fn set_muted(&mut self, muted: bool) {
        self.sounds.set_muted(muted);
        self.persist_muted(muted);
    }

    /// Flip and persist the mute preference, returning the new value
    pub fn toggle_muted(&mut self) -> bool {
        let muted = self.sounds.toggle_muted();
        self.persist_muted(muted);
        muted
    }

    fn persist_muted(&mut self, muted: bool) {
        if let Err(error) = save_muted(&mut self.store, muted) {
            warn!(%error, "could not save mute preference");
        }
    }

    /// Read commands line by line until quit or end of input
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing `out` fails
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        render_session(&self.session, out)?;

        for line in input.lines() {
            let line = line.map_err(|e| GameError::Terminal { source: e })?;
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = parse_command(&line) else {
                writeln!(out, "Unknown command '{}'. {HELP_TEXT}", line.trim())?;
                continue;
            };

            if !self.handle(command, out)? {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Apply one command, returning `false` when the player quits
    ///
    /// # Errors
    ///
    /// Returns an error if writing `out` fails
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::Move(direction) => {
                let outcome = self.session.apply_move(direction);
                self.after_turn(&outcome, out)?;
            }
            Command::Restart => {
                self.session.new_game();
                render_session(&self.session, out)?;
            }
            Command::Share => {
                writeln!(out, "{}", share_message(self.session.score()))?;
            }
            Command::ToggleMute => {
                let muted = self.toggle_muted();
                writeln!(out, "Sound {}", if muted { "off" } else { "on" })?;
            }
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn after_turn(&mut self, outcome: &TurnOutcome, out: &mut impl Write) -> Result<()> {
        if !outcome.accepted() {
            if self.session.is_over() {
                writeln!(out, "The game is over. Press n for a new game or q to quit.")?;
            }
            return Ok(());
        }

        if outcome.new_best {
            if let Err(error) = save_best(&mut self.store, self.session.best()) {
                warn!(%error, "could not save best score");
            }
        }

        let now = Instant::now();
        for cue in cues_for(outcome) {
            if self.sounds.play(cue, now) {
                // Terminal bell stands in for the audio clip
                write!(out, "\u{7}")?;
            }
        }

        render_session(&self.session, out)
    }
}

/// Orchestrates a run according to CLI arguments
pub struct Launcher {
    cli: Cli,
}

impl Launcher {
    /// Create a launcher for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Play interactively on stdin/stdout, or autoplay when requested
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the terminal fails
    /// or the snapshot cannot be written
    pub fn launch(&self) -> Result<()> {
        let config = self.cli.game_config()?;
        let seed = self.cli.resolve_seed();
        let store = self.cli.open_store();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match self.cli.autoplay {
            Some(games) => {
                let summary = self.run_autoplay(config, games, seed, store, &mut out)?;
                info!(games = summary.games, wins = summary.wins, "autoplay finished");
            }
            None => {
                let mut runner = GameRunner::new(config, seed, store);
                if self.cli.mute {
                    runner.set_muted(true);
                }
                runner.run(std::io::stdin().lock(), &mut out)?;
                self.write_snapshot(runner.session().grid())?;
            }
        }

        Ok(())
    }

    /// Play `games` games, persist a higher best score and print a summary
    ///
    /// # Errors
    ///
    /// Returns an error if writing `out` fails or the snapshot cannot be
    /// written
    pub fn run_autoplay<S: KeyValueStore>(
        &self,
        config: GameConfig,
        games: usize,
        seed: u64,
        mut store: S,
        out: &mut impl Write,
    ) -> Result<AutoplaySummary> {
        let previous_best = load_best(&mut store);
        let mut progress = if self.cli.should_show_progress() {
            AutoplayProgress::new(games)
        } else {
            AutoplayProgress::hidden(games)
        };

        let mut final_grid = None;
        let summary = autoplay(config, games, seed, previous_best, |index, record, session| {
            progress.record_game(record, session.best());
            if index + 1 == games {
                final_grid = Some(session.grid().clone());
            }
        });
        progress.finish();

        if summary.best > previous_best {
            if let Err(error) = save_best(&mut store, summary.best) {
                warn!(%error, "could not save best score");
            }
        }

        if self.cli.json {
            let json = serde_json::to_string_pretty(&summary).map_err(|e| GameError::StoreFormat {
                path: PathBuf::from("<stdout>"),
                source: e,
            })?;
            writeln!(out, "{json}")?;
        } else {
            writeln!(
                out,
                "Games: {}  Wins: {}  Best: {}  Mean score: {:.1}  Largest tile: {}",
                summary.games, summary.wins, summary.best, summary.mean_score, summary.max_tile
            )?;
        }

        if let Some(grid) = &final_grid {
            self.write_snapshot(grid)?;
        }

        Ok(summary)
    }

    fn write_snapshot(&self, grid: &Grid) -> Result<()> {
        if let Some(path) = &self.cli.snapshot {
            export_grid_as_png(grid, path, SNAPSHOT_CELL_SIZE, SNAPSHOT_GAP)?;
            info!(path = %path.display(), "saved board snapshot");
        }
        Ok(())
    }
}
