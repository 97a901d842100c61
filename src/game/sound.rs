//! Sound cue selection with mute preference and repeat throttling

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::game::session::{GameStatus, TurnOutcome};
use crate::io::configuration::SOUND_MIN_INTERVAL_MS;

/// Audible feedback for a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Tiles slid without merging
    Move,
    /// At least one merge happened
    Merge,
    /// The turn ended the game in a loss
    GameOver,
}

/// Cues a turn should produce, in playing order
///
/// Rejected moves are silent. A losing turn plays its move cue followed by
/// the game-over cue.
pub fn cues_for(outcome: &TurnOutcome) -> Vec<SoundCue> {
    if !outcome.accepted() {
        return Vec::new();
    }

    let mut cues = vec![if outcome.result.merged {
        SoundCue::Merge
    } else {
        SoundCue::Move
    }];
    if outcome.status == GameStatus::Lost {
        cues.push(SoundCue::GameOver);
    }
    cues
}

/// Decides whether a cue should actually be played
///
/// Muted boards play nothing, and the same cue is suppressed when requested
/// again within the minimum interval.
#[derive(Debug, Clone)]
pub struct SoundBoard {
    muted: bool,
    min_interval: Duration,
    last_played: HashMap<SoundCue, Instant>,
}

impl SoundBoard {
    /// Create a sound board with the default repeat interval
    pub fn new(muted: bool) -> Self {
        Self::with_interval(muted, Duration::from_millis(SOUND_MIN_INTERVAL_MS))
    }

    /// Create a sound board with a custom repeat interval
    pub fn with_interval(muted: bool, min_interval: Duration) -> Self {
        Self {
            muted,
            min_interval,
            last_played: HashMap::new(),
        }
    }

    /// Whether sounds are muted
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    /// Change the mute preference
    pub const fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip the mute preference and return the new value
    pub const fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Record a play request at `now`, returning whether it should sound
    pub fn play(&mut self, cue: SoundCue, now: Instant) -> bool {
        if self.muted {
            return false;
        }

        if let Some(&last) = self.last_played.get(&cue) {
            if now.saturating_duration_since(last) < self.min_interval {
                return false;
            }
        }

        self.last_played.insert(cue, now);
        true
    }
}
