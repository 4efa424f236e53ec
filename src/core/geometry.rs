//=========================================================================
// Geometry
//=========================================================================
//
// Pure cell <-> pixel conversion for the current surface dimensions.
//
//   cell_size()      → (col_width, row_height) = (width / N, height / N)
//   cell_origin(r,c) → top-left pixel of a cell
//   pixel_to_cell()  → raw (row, col), unclamped, may be out of range
//   cell_at()        → bounds-checked variant used by input dispatch
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::board::GRID_SIZE;

//=== PixelPoint ==========================================================

/// A point in surface space (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

//=== CellIndex ===========================================================

/// A validated `(row, col)` pair, both in `[0, GRID_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

//=== Geometry ============================================================

/// Cell/pixel mapping for an N×N grid stretched over the whole surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    width: f32,
    height: f32,
}

impl Geometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Recomputes the mapping after a surface resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns `(col_width, row_height)`.
    pub fn cell_size(&self) -> (f32, f32) {
        let n = GRID_SIZE as f32;
        (self.width / n, self.height / n)
    }

    /// Top-left pixel of the cell at `(row, col)`.
    pub fn cell_origin(&self, row: usize, col: usize) -> PixelPoint {
        let (col_width, row_height) = self.cell_size();
        PixelPoint::new(col as f32 * col_width, row as f32 * row_height)
    }

    /// Maps a pixel to raw `(row, col)` indices.
    ///
    /// Does not clamp: points left of or above the surface give negative
    /// indices, points past its far edges give indices `>= GRID_SIZE`.
    /// On a zero-sized surface the float-to-int cast saturates; use
    /// [`Geometry::cell_at`] when the result feeds game logic.
    pub fn pixel_to_cell(&self, x: f32, y: f32) -> (i64, i64) {
        let (col_width, row_height) = self.cell_size();
        let row = (y / row_height).floor() as i64;
        let col = (x / col_width).floor() as i64;
        (row, col)
    }

    /// Bounds-checked [`Geometry::pixel_to_cell`].
    ///
    /// Returns `None` for any pixel that does not land on the grid.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<CellIndex> {
        if !x.is_finite() || !y.is_finite() || self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }

        let (row, col) = self.pixel_to_cell(x, y);
        let n = GRID_SIZE as i64;

        if (0..n).contains(&row) && (0..n).contains(&col) {
            Some(CellIndex {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_divides_surface() {
        let geometry = Geometry::new(300, 600);
        assert_eq!(geometry.cell_size(), (100.0, 200.0));
    }

    #[test]
    fn cell_origin_scales_by_cell_size() {
        let geometry = Geometry::new(300, 600);
        assert_eq!(geometry.cell_origin(0, 0), PixelPoint::new(0.0, 0.0));
        assert_eq!(geometry.cell_origin(2, 1), PixelPoint::new(100.0, 400.0));
    }

    #[test]
    fn origin_plus_one_maps_back_to_cell() {
        let geometry = Geometry::new(640, 480);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let origin = geometry.cell_origin(row, col);
                assert_eq!(
                    geometry.pixel_to_cell(origin.x + 1.0, origin.y + 1.0),
                    (row as i64, col as i64),
                    "Round trip failed for ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn pixel_to_cell_does_not_clamp() {
        let geometry = Geometry::new(300, 300);
        assert_eq!(geometry.pixel_to_cell(-1.0, -1.0), (-1, -1));
        assert_eq!(geometry.pixel_to_cell(300.0, 450.0), (4, 3));
    }

    #[test]
    fn cell_at_rejects_off_grid_points() {
        let geometry = Geometry::new(300, 300);
        assert_eq!(geometry.cell_at(-0.5, 10.0), None);
        assert_eq!(geometry.cell_at(10.0, 300.0), None);
        assert_eq!(geometry.cell_at(f32::NAN, 10.0), None);
        assert_eq!(geometry.cell_at(150.0, 10.0), Some(CellIndex { row: 0, col: 1 }));
    }

    #[test]
    fn cell_at_rejects_everything_on_empty_surface() {
        let geometry = Geometry::new(0, 0);
        assert_eq!(geometry.cell_at(0.0, 0.0), None);
    }

    #[test]
    fn resize_recomputes_cells() {
        let mut geometry = Geometry::new(300, 300);
        geometry.resize(900, 90);
        assert_eq!(geometry.cell_size(), (300.0, 30.0));
        assert_eq!(geometry.cell_at(450.0, 45.0), Some(CellIndex { row: 1, col: 1 }));
    }
}
