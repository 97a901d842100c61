//! Progress display for autoplayed batches

use crate::game::autoplay::GameRecord;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Games: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks finished games and the running best while a batch plays
pub struct AutoplayProgress {
    bar: ProgressBar,
    wins: usize,
}

impl AutoplayProgress {
    /// Create a progress bar for `games` games
    pub fn new(games: usize) -> Self {
        let bar = ProgressBar::new(games as u64);
        bar.set_style(GAME_STYLE.clone());
        Self { bar, wins: 0 }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(games: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(games as u64);
        Self { bar, wins: 0 }
    }

    /// Record a finished game
    pub fn record_game(&mut self, record: &GameRecord, best: u64) {
        self.wins += usize::from(record.won);
        self.bar.inc(1);
        self.bar.set_message(format!("best {best} | wins {}", self.wins));
    }

    /// Games recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Wins recorded so far
    pub const fn wins(&self) -> usize {
        self.wins
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
