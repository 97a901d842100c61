//! Translation of key presses and swipe gestures into game commands

use crate::engine::Direction;
use crate::io::configuration::SWIPE_THRESHOLD;

/// Action requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide the tiles
    Move(Direction),
    /// Start over with a fresh board
    Restart,
    /// Show the share message for the current score
    Share,
    /// Flip the mute preference
    ToggleMute,
    /// Show the key reference
    Help,
    /// Leave the game
    Quit,
}

/// Parse one line of terminal input
///
/// Accepts arrow-key escape sequences, browser key names (`ArrowLeft`),
/// `wasd`, vi-style `hjkl` and the full direction names. A line of the form
/// `swipe <dx> <dy>` replays a touch gesture in pixels; gestures below the
/// swipe threshold are not a command. Matching ignores case and surrounding
/// whitespace.
pub fn parse_command(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    if let Some(direction) = direction_for_key(trimmed) {
        return Some(Command::Move(direction));
    }

    let key = trimmed.to_ascii_lowercase();
    if let Some(gesture) = key.strip_prefix("swipe ") {
        return parse_swipe(gesture).map(Command::Move);
    }

    let command = match key.as_str() {
        "w" | "k" | "up" | "\u{1b}[a" => Command::Move(Direction::Up),
        "s" | "j" | "down" | "\u{1b}[b" => Command::Move(Direction::Down),
        "a" | "h" | "left" | "\u{1b}[d" => Command::Move(Direction::Left),
        "d" | "l" | "right" | "\u{1b}[c" => Command::Move(Direction::Right),
        "n" | "r" | "new" | "restart" => Command::Restart,
        "share" => Command::Share,
        "m" | "mute" => Command::ToggleMute,
        "?" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn parse_swipe(gesture: &str) -> Option<Direction> {
    let mut offsets = gesture.split_whitespace().map(str::parse::<f64>);
    let (Some(Ok(dx)), Some(Ok(dy)), None) = (offsets.next(), offsets.next(), offsets.next())
    else {
        return None;
    };
    classify_swipe(dx, dy)
}

/// Map a browser key name (`ArrowLeft`, ...) to a direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Classify a swipe using the default threshold
pub fn classify_swipe(dx: f64, dy: f64) -> Option<Direction> {
    classify_swipe_with_threshold(dx, dy, SWIPE_THRESHOLD)
}

/// Classify a swipe from its displacement in pixels
///
/// Gestures whose longer axis is shorter than `threshold` are ignored. The
/// dominant axis picks the direction; screen coordinates grow rightwards and
/// downwards, and ties between the axes count as vertical.
pub fn classify_swipe_with_threshold(dx: f64, dy: f64, threshold: f64) -> Option<Direction> {
    let (abs_x, abs_y) = (dx.abs(), dy.abs());
    if dx.is_nan() || dy.is_nan() || abs_x.max(abs_y) < threshold {
        return None;
    }

    let direction = if abs_x > abs_y {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}

/// One-line key reference shown by the help command
pub const HELP_TEXT: &str = concat!(
    "move: w/a/s/d, h/j/k/l, arrows or swipe <dx> <dy>",
    " | n: new game | m: mute | share | q: quit"
);
