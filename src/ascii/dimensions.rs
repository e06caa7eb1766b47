//! Aspect-ratio-correct sizing of the character grid.

/// Terminal cells are roughly twice as tall as they are wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Largest grid that fits in `max_cols` x `max_rows` and shows an
/// `img_width` x `img_height` image undistorted.
///
/// Returns `(0, 0)` if either the image or the available area is empty.
pub fn calculate_dimensions(
    img_width: u32,
    img_height: u32,
    max_cols: u16,
    max_rows: u16,
) -> (u16, u16) {
    calculate_dimensions_with_aspect(
        img_width,
        img_height,
        max_cols,
        max_rows,
        DEFAULT_CHAR_ASPECT_RATIO,
    )
}

/// Same as [`calculate_dimensions`] with an explicit cell aspect ratio
/// (cell height / cell width).
pub fn calculate_dimensions_with_aspect(
    img_width: u32,
    img_height: u32,
    max_cols: u16,
    max_rows: u16,
    char_aspect: f32,
) -> (u16, u16) {
    if img_width == 0 || img_height == 0 || max_cols == 0 || max_rows == 0 {
        return (0, 0);
    }

    // Columns per row needed for the image to look right on screen.
    let target = img_width as f32 / img_height as f32 * char_aspect;

    let rows = ((max_cols as f32 / target).round() as u16).max(1);
    if rows <= max_rows {
        return (max_cols, rows);
    }

    let cols = ((max_rows as f32 * target).round() as u16).min(max_cols);
    (cols.max(1), max_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_bound() {
        // 4:3 image in a tall area: full width, rows from aspect
        assert_eq!(calculate_dimensions(640, 480, 40, 100), (40, 15));
    }

    #[test]
    fn test_height_bound() {
        // 4:3 image in a wide area: full height, cols from aspect
        assert_eq!(calculate_dimensions(640, 480, 200, 15), (40, 15));
    }

    #[test]
    fn test_square_cells() {
        assert_eq!(calculate_dimensions_with_aspect(100, 100, 50, 50, 1.0), (50, 50));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(calculate_dimensions(0, 480, 80, 24), (0, 0));
        assert_eq!(calculate_dimensions(640, 480, 0, 24), (0, 0));
    }

    #[test]
    fn test_very_wide_image_keeps_one_row() {
        let (cols, rows) = calculate_dimensions(10_000, 1, 80, 24);
        assert_eq!(cols, 80);
        assert_eq!(rows, 1);
    }
}
