//! Display geometry the grid is derived from.

/// Screen resolution and cell size of a heat simulation.
///
/// The grid covers the whole display plus one extra row and column, so the
/// last cell on each axis sits on the right/top edge of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub width_px: u32,
    pub height_px: u32,
    /// Side length of one cell in pixels. Must be nonzero.
    pub cell_px: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width_px: 1024,
            height_px: 768,
            cell_px: 32,
        }
    }
}

impl SimConfig {
    /// `(width, height)` of the grid in cells.
    ///
    /// # Panics
    ///
    /// Panics if `cell_px` is zero.
    pub fn grid_dims(&self) -> (usize, usize) {
        assert!(self.cell_px > 0);

        (
            (self.width_px / self.cell_px) as usize + 1,
            (self.height_px / self.cell_px) as usize + 1,
        )
    }

    /// Translate a screen position to the cell under it.
    ///
    /// Returns `None` for positions that don't fall on the grid, and for a
    /// zero `cell_px`.
    pub fn cell_at(&self, px: f64, py: f64) -> Option<(usize, usize)> {
        if self.cell_px == 0 || !(px >= 0.0 && py >= 0.0) {
            return None;
        }

        let (w, h) = self.grid_dims();
        let x = px as usize / self.cell_px as usize;
        let y = py as usize / self.cell_px as usize;

        if x < w && y < h {
            Some((x, y))
        } else {
            None
        }
    }
}
