//! Sliding-tile number puzzle in the style of 2048
//!
//! A square grid of powers of two slides in four directions; equal
//! neighbours merge once per move and add their new value to the score.
//! The grid engine is deterministic apart from tile spawning, which draws
//! from an injected random source, and a game session sequences each move,
//! the following spawn and the win/loss checks in one synchronous call.

#![forbid(unsafe_code)]

/// Grid representation, moves, termination checks and tile spawning
pub mod engine;
/// Game session, autoplay and sound cues
pub mod game;
/// Input/output operations, persistence and error handling
pub mod io;

pub use engine::{Direction, Grid, MoveResult, apply_move};
pub use game::{GameStatus, Session, TurnOutcome};
pub use io::error::{GameError, Result};
