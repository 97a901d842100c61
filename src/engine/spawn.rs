//! Random tile placement on empty cells

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::engine::grid::Grid;

/// Tile placed by [`spawn_random_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    /// Grid position `[row, col]`
    pub position: [usize; 2],
    /// Spawned value, 2 or 4
    pub value: u32,
}

/// Draw a new tile value: 2 with `two_probability`, otherwise 4
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R, two_probability: f64) -> u32 {
    if rng.random_bool(two_probability.clamp(0.0, 1.0)) {
        2
    } else {
        4
    }
}

/// Place a 2 or 4 on a uniformly chosen empty cell
///
/// A full grid is left untouched and `None` is returned.
pub fn spawn_random_tile<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    two_probability: f64,
) -> Option<SpawnedTile> {
    let empty = grid.empty_cells();
    let &[row, col] = empty.choose(rng)?;
    let value = random_tile_value(rng, two_probability);

    grid.set(row, col, value).then_some(SpawnedTile {
        position: [row, col],
        value,
    })
}
