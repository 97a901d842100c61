//! Tests for PNG board snapshots

#[cfg(test)]
mod tests {
    use number_puzzle::engine::Grid;
    use number_puzzle::io::image::{export_grid_as_png, render_grid_image, tile_color};
    use tempfile::TempDir;

    fn sample_grid() -> Grid {
        let rows = vec![
            vec![2, 0, 0, 0],
            vec![0, 4, 0, 0],
            vec![0, 0, 2048, 0],
            vec![0, 0, 0, 8192],
        ];
        Grid::from_rows(&rows).unwrap()
    }

    // Tests image dimensions include cells and gaps
    // Verified by omitting the outer gap
    #[test]
    fn test_render_grid_image_dimensions() {
        let img = render_grid_image(&sample_grid(), 10, 2);

        assert_eq!(img.dimensions(), (4 * 10 + 5 * 2, 4 * 10 + 5 * 2));
    }

    // Tests cells are painted with their tile colour and gaps with the board colour
    // Verified by painting every cell with the empty colour
    #[test]
    fn test_render_grid_image_colors() {
        let img = render_grid_image(&sample_grid(), 10, 2);

        assert_eq!(img.get_pixel(2, 2).0, tile_color(2));
        assert_eq!(img.get_pixel(2 + 12 + 5, 2 + 12 + 5).0, tile_color(4));
        assert_eq!(img.get_pixel(2 + 12, 2).0, tile_color(0));
        assert_ne!(img.get_pixel(0, 0).0, tile_color(0));
    }

    // Tests palette lookup, including values beyond the palette
    // Verified by indexing by value instead of exponent
    #[test]
    fn test_tile_color_palette() {
        assert_ne!(tile_color(2), tile_color(4));
        assert_ne!(tile_color(0), tile_color(2));
        assert_eq!(tile_color(8192), tile_color(2048));
    }

    // Tests PNG file creation including missing parent directories
    // Verified by disabling file save operation
    #[test]
    fn test_export_grid_as_png_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("shots").join("board.png");

        let result = export_grid_as_png(&sample_grid(), &output_path, 16, 4);

        assert!(result.is_ok(), "PNG export should succeed");
        assert!(output_path.exists(), "PNG file should be created");
        let decoded = image::open(&output_path).unwrap();
        assert_eq!(decoded.width(), 4 * 16 + 5 * 4);
    }

    // Tests unsupported extensions are reported
    // Verified by ignoring save errors
    #[test]
    fn test_export_grid_rejects_unknown_format() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("board.unknown");

        assert!(export_grid_as_png(&sample_grid(), &output_path, 16, 4).is_err());
    }
}
