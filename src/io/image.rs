//! PNG snapshot of a board using the classic tile palette

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::engine::Grid;
use crate::io::error::{GameError, Result};

const BOARD_COLOR: [u8; 4] = [187, 173, 160, 255];
const EMPTY_COLOR: [u8; 4] = [205, 193, 180, 255];
// Tiles beyond the palette share the last colour
const TILE_PALETTE: [[u8; 4]; 11] = [
    [238, 228, 218, 255], // 2
    [237, 224, 200, 255], // 4
    [242, 177, 121, 255], // 8
    [245, 149, 99, 255],  // 16
    [246, 124, 95, 255],  // 32
    [246, 94, 59, 255],   // 64
    [237, 207, 114, 255], // 128
    [237, 204, 97, 255],  // 256
    [237, 200, 80, 255],  // 512
    [237, 197, 63, 255],  // 1024
    [237, 194, 46, 255],  // 2048 and above
];

/// Colour used to paint a cell holding `value`
pub fn tile_color(value: u32) -> [u8; 4] {
    if value == 0 {
        return EMPTY_COLOR;
    }
    let index = (value.trailing_zeros() as usize).saturating_sub(1);
    TILE_PALETTE
        .get(index)
        .or_else(|| TILE_PALETTE.last())
        .copied()
        .unwrap_or(EMPTY_COLOR)
}

/// Paint the board into an in-memory image
///
/// Each cell becomes a `cell_size` square separated by `gap` pixels of
/// board background.
pub fn render_grid_image(grid: &Grid, cell_size: u32, gap: u32) -> RgbaImage {
    let cells = grid.size() as u32;
    let side = cells * cell_size + (cells + 1) * gap;
    let mut img = ImageBuffer::from_pixel(side, side, Rgba(BOARD_COLOR));

    for (row_index, row) in grid.rows().iter().enumerate() {
        for (col_index, &value) in row.iter().enumerate() {
            let left = gap + col_index as u32 * (cell_size + gap);
            let top = gap + row_index as u32 * (cell_size + gap);
            let color = Rgba(tile_color(value));
            for y in top..top + cell_size {
                for x in left..left + cell_size {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }

    img
}

/// Save a PNG snapshot of the board
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path, cell_size: u32, gap: u32) -> Result<()> {
    let img = render_grid_image(grid, cell_size, gap);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GameError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
