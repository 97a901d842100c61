//! Grid engine: board representation, moves, termination checks and spawning
//!
//! Everything here is deterministic except [`spawn`], which draws from an
//! injected random source.

/// Closed set of move directions
pub mod direction;
/// Square tile grid and its queries
pub mod grid;
/// Directional moves and their results
pub mod moves;
/// Row compaction with merge
pub mod row;
/// Random tile placement
pub mod spawn;

pub use direction::Direction;
pub use grid::Grid;
pub use moves::{MoveResult, apply_move};
