//! Row compaction with merge, the primitive behind every move direction

/// Largest value a cell can hold
///
/// Two of these never merge since their sum does not fit in a `u32` cell.
pub const MAX_TILE: u32 = 1 << 31;

/// Whether two neighbouring cells combine during a slide
pub const fn can_merge(left: u32, right: u32) -> bool {
    left == right && left != 0 && left < MAX_TILE
}

/// Outcome of sliding one row towards its start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSlide {
    /// Compacted row, padded with zeros to the input length
    pub row: Vec<u32>,
    /// Sum of the values created by merges
    pub points: u64,
    /// Whether at least one merge happened
    pub merged: bool,
}

/// Slide a row left, merging equal neighbours once per pass
///
/// Zeros are dropped, then survivors are scanned from the left. An equal
/// adjacent pair becomes one tile of double value and the new tile cannot
/// take part in another merge during the same pass, so `[2, 2, 2, 2]`
/// yields `[4, 4, 0, 0]` and `[2, 0, 2, 2]` yields `[4, 2, 0, 0]`. Pairs of
/// [`MAX_TILE`] slide without merging.
pub fn slide_row_left(row: &[u32]) -> RowSlide {
    let mut tiles = row.iter().copied().filter(|&value| value != 0).peekable();
    let mut compacted = Vec::with_capacity(row.len());
    let mut points = 0;
    let mut merged = false;

    while let Some(value) = tiles.next() {
        if tiles.next_if(|&next| can_merge(value, next)).is_some() {
            let doubled = value << 1;
            compacted.push(doubled);
            points += u64::from(doubled);
            merged = true;
        } else {
            compacted.push(value);
        }
    }

    compacted.resize(row.len(), 0);

    RowSlide {
        row: compacted,
        points,
        merged,
    }
}

/// Slide a row right by mirroring it around [`slide_row_left`]
pub fn slide_row_right(row: &[u32]) -> RowSlide {
    let reversed: Vec<u32> = row.iter().rev().copied().collect();
    let mut slide = slide_row_left(&reversed);
    slide.row.reverse();
    slide
}
