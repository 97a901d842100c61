//! Game constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

/// Side length of the classic board
pub const GRID_SIZE: usize = 4;

// Boards outside this range are either trivially stuck or unreadable in a terminal
/// Smallest supported board side length
pub const MIN_GRID_SIZE: usize = 2;
/// Largest supported board side length
pub const MAX_GRID_SIZE: usize = 8;

/// Tile value whose appearance wins the game (2^11)
pub const TARGET_TILE: u32 = 2048;

/// Probability that a spawned tile is a 2 rather than a 4
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Number of tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

// Persisted keys, named after the browser storage keys of the web version
/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "number_puzzle_best";
/// Legacy storage key migrated into [`BEST_SCORE_KEY`] on first read
pub const LEGACY_BEST_SCORE_KEY: &str = "2048_best";
/// Storage key for the mute preference
pub const MUTED_KEY: &str = "number_puzzle_muted";

/// Default location of the persisted store
pub const DEFAULT_STORE_PATH: &str = ".number_puzzle.json";

/// Minimum swipe length in pixels before a gesture counts as a move
pub const SWIPE_THRESHOLD: f64 = 30.0;

/// Minimum delay between two plays of the same sound cue
pub const SOUND_MIN_INTERVAL_MS: u64 = 50;

/// Edge length of one cell in board snapshots, in pixels
pub const SNAPSHOT_CELL_SIZE: u32 = 64;
/// Gap between cells in board snapshots, in pixels
pub const SNAPSHOT_GAP: u32 = 8;

/// Width of the autoplay progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Safety cap on moves per autoplayed game
pub const MAX_AUTOPLAY_MOVES: usize = 100_000;

/// Rules that shape a single game
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    /// Board side length
    pub size: usize,
    /// Tile value that wins the game
    pub target: u32,
    /// Probability that a spawned tile is a 2
    pub two_probability: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            target: TARGET_TILE,
            two_probability: SPAWN_TWO_PROBABILITY,
        }
    }
}

impl GameConfig {
    /// Build a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter fails [`GameConfig::validate`]
    pub fn new(size: usize, target: u32, two_probability: f64) -> Result<Self> {
        let config = Self {
            size,
            target,
            two_probability,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a playable game
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The board size is outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`
    /// - The target is not a power of two of at least 4
    /// - The spawn probability is not within `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"),
            ));
        }

        if self.target < 4 || !self.target.is_power_of_two() {
            return Err(invalid_parameter(
                "target",
                &self.target,
                &"must be a power of two of at least 4",
            ));
        }

        if !(0.0..=1.0).contains(&self.two_probability) {
            return Err(invalid_parameter(
                "two_probability",
                &self.two_probability,
                &"must be within [0, 1]",
            ));
        }

        Ok(())
    }
}
