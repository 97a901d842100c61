//! Game session state and the feedback derived from it

/// Batch play with a random policy
pub mod autoplay;
/// Owned session: score, best score, status and turn sequencing
pub mod session;
/// Sound cue selection and throttling
pub mod sound;

pub use session::{GameStatus, Session, TurnOutcome};
