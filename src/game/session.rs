//! Explicitly owned game session sequencing move, spawn and terminal checks

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::engine::spawn::{SpawnedTile, spawn_random_tile};
use crate::engine::{Direction, Grid, MoveResult, apply_move};
use crate::io::configuration::{GameConfig, INITIAL_TILES};
use crate::io::error::{Result, invalid_grid};

/// Phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are accepted
    Playing,
    /// The target tile appeared
    Won,
    /// The grid is full and nothing can merge
    Lost,
}

/// Everything the caller needs after one move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Direction that was requested
    pub direction: Direction,
    /// Engine summary of the move
    pub result: MoveResult,
    /// Tile added after an accepted move
    pub spawned: Option<SpawnedTile>,
    /// Session status once the turn finished
    pub status: GameStatus,
    /// Whether the best score rose during this turn
    pub new_best: bool,
}

impl TurnOutcome {
    /// Whether the move was applied
    pub const fn accepted(&self) -> bool {
        self.result.changed
    }
}

/// A single game in progress plus the cross-game best score
///
/// The session exclusively owns its grid and random source. Moves are
/// applied synchronously: the engine move, the spawn and the win/loss checks
/// all happen inside one [`Session::apply_move`] call.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    score: u64,
    best: u64,
    status: GameStatus,
    moves: u64,
    rng: StdRng,
}

impl Session {
    /// Start a new game seeded for reproducibility
    ///
    /// `best` is the persisted high-water mark carried across games.
    pub fn new(config: GameConfig, best: u64, seed: u64) -> Self {
        let mut session = Self {
            config,
            grid: Grid::new(config.size),
            score: 0,
            best,
            status: GameStatus::Playing,
            moves: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        session.new_game();
        session
    }

    /// Resume from an explicit grid and score
    ///
    /// The status is derived from the grid so a board that already holds the
    /// target or has no moves left starts out terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size differs from `config.size`
    pub fn from_grid(
        config: GameConfig,
        grid: Grid,
        score: u64,
        best: u64,
        seed: u64,
    ) -> Result<Self> {
        if grid.size() != config.size {
            return Err(invalid_grid(&format!(
                "grid is {0}x{0} but the game is configured for {1}x{1}",
                grid.size(),
                config.size
            )));
        }

        let status = status_of(&grid, config.target);
        Ok(Self {
            config,
            grid,
            score,
            best: best.max(score),
            status,
            moves: 0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Discard the current game and deal a fresh board
    ///
    /// Score, status and move counter reset; the best score is kept.
    pub fn new_game(&mut self) {
        self.grid = Grid::new(self.config.size);
        self.score = 0;
        self.status = GameStatus::Playing;
        self.moves = 0;

        for _ in 0..INITIAL_TILES {
            spawn_random_tile(&mut self.grid, &mut self.rng, self.config.two_probability);
        }

        info!(size = self.config.size, target = self.config.target, "new game");
    }

    /// Apply a move request
    ///
    /// Ignored (reported as unchanged) once the game is won or lost, and
    /// when the move would not change the grid. An accepted move adds its
    /// points, raises the best score when exceeded, spawns one tile and then
    /// checks for a win followed by a loss.
    pub fn apply_move(&mut self, direction: Direction) -> TurnOutcome {
        let mut outcome = TurnOutcome {
            direction,
            result: MoveResult::default(),
            spawned: None,
            status: self.status,
            new_best: false,
        };

        if self.status != GameStatus::Playing {
            debug!(%direction, status = ?self.status, "move ignored after game end");
            return outcome;
        }

        let (grid, result) = apply_move(&self.grid, direction);
        outcome.result = result;
        if !result.changed {
            debug!(%direction, "move changed nothing");
            return outcome;
        }

        self.grid = grid;
        self.moves += 1;
        self.score += result.points_gained;
        if self.score > self.best {
            self.best = self.score;
            outcome.new_best = true;
        }

        outcome.spawned =
            spawn_random_tile(&mut self.grid, &mut self.rng, self.config.two_probability);
        self.status = status_of(&self.grid, self.config.target);
        outcome.status = self.status;

        debug!(
            %direction,
            points = result.points_gained,
            score = self.score,
            "move applied"
        );
        match self.status {
            GameStatus::Won => info!(score = self.score, moves = self.moves, "target reached"),
            GameStatus::Lost => info!(score = self.score, moves = self.moves, "no moves left"),
            GameStatus::Playing => {}
        }

        outcome
    }

    /// Current grid snapshot
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Score of the current game
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Best score across games
    pub const fn best(&self) -> u64 {
        self.best
    }

    /// Current status
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves in the current game
    pub const fn moves(&self) -> u64 {
        self.moves
    }

    /// Rules this session plays by
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the game has been won
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Whether the game has been lost
    pub fn is_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    /// Whether no further moves will be accepted
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }
}

/// Win takes precedence over loss when both hold
fn status_of(grid: &Grid, target: u32) -> GameStatus {
    if grid.contains_tile(target) {
        GameStatus::Won
    } else if grid.has_moves() {
        GameStatus::Playing
    } else {
        GameStatus::Lost
    }
}

/// Text offered when the player shares a score
pub fn share_message(score: u64) -> String {
    format!("I scored {score} in Number Puzzle Game — can you beat me?")
}
