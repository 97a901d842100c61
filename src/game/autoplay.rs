//! Batch play with a seeded random policy

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::debug;

use crate::engine::moves::legal_moves;
use crate::game::session::{GameStatus, Session};
use crate::io::configuration::{GameConfig, MAX_AUTOPLAY_MOVES};

/// Result of one autoplayed game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Final score
    pub score: u64,
    /// Accepted moves
    pub moves: u64,
    /// Largest tile on the final board
    pub max_tile: u32,
    /// Whether the target tile was reached
    pub won: bool,
}

/// Aggregate over a batch of autoplayed games
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoplaySummary {
    /// Games played
    pub games: usize,
    /// Games that reached the target
    pub wins: usize,
    /// Best score, including the one carried in from earlier sessions
    pub best: u64,
    /// Mean final score over the batch
    pub mean_score: f64,
    /// Largest tile seen in any game
    pub max_tile: u32,
}

/// Play the session's current game to the end with uniformly random legal moves
///
/// Stops early after [`MAX_AUTOPLAY_MOVES`] accepted moves.
pub fn play_random_game<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> GameRecord {
    let mut steps = 0;
    while !session.is_over() && steps < MAX_AUTOPLAY_MOVES {
        let Some(&direction) = legal_moves(session.grid()).choose(rng) else {
            break;
        };
        session.apply_move(direction);
        steps += 1;
    }

    GameRecord {
        score: session.score(),
        moves: session.moves(),
        max_tile: session.grid().max_tile(),
        won: session.status() == GameStatus::Won,
    }
}

/// Play `games` consecutive games from one seed
///
/// `on_game` runs after every game with its index, its record and the
/// session, which still holds the finished board and the running best.
pub fn autoplay(
    config: GameConfig,
    games: usize,
    seed: u64,
    best: u64,
    mut on_game: impl FnMut(usize, &GameRecord, &Session),
) -> AutoplaySummary {
    let mut session = Session::new(config, best, seed);
    let mut policy_rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    let mut wins = 0;
    let mut total_score = 0_u64;
    let mut max_tile = 0;

    for index in 0..games {
        if index > 0 {
            session.new_game();
        }
        let record = play_random_game(&mut session, &mut policy_rng);
        debug!(game = index, score = record.score, won = record.won, "autoplayed game");

        wins += usize::from(record.won);
        total_score += record.score;
        max_tile = max_tile.max(record.max_tile);
        on_game(index, &record, &session);
    }

    let mean_score = if games == 0 {
        0.0
    } else {
        total_score as f64 / games as f64
    };

    AutoplaySummary {
        games,
        wins,
        best: session.best(),
        mean_score,
        max_tile,
    }
}
