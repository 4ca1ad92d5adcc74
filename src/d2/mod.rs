use ndarray::{Array2, ArrayViewMut2};

use crate::color::{Rgb, BLACK, MAX_SUPPLY, MIN_SUPPLY};
use crate::config::SimConfig;
use crate::error::GridError;

mod engine;
mod mesh;
mod stencil;

pub use engine::DiffusionEngine;
pub use mesh::{quads, Quad};

/// An input action coming from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEdit {
    /// Toggle a hot source at a cell.
    Heat { x: usize, y: usize },
    /// Toggle a cold source at a cell.
    Cold { x: usize, y: usize },
    /// Remove every source.
    Clear,
}

/// Temperature, source and color fields of a `width x height` grid.
///
/// All fields have shape `(width, height)` and are indexed `[[x, y]]`, so
/// the linear index of a cell is `x * height + y`.
///
/// A nonzero supply pins its cell to that value on every step. A supply of
/// exactly `0.0` leaves the cell free.
#[derive(Debug, Clone)]
pub struct GridState {
    cells: Array2<f64>,
    // written by the engine, then swapped with `cells`
    back: Array2<f64>,
    supplies: Array2<f64>,
    colors: Array2<Rgb>,
}

impl GridState {
    pub fn new(width: usize, height: usize) -> Self {
        let dim = (width, height);

        Self {
            cells: Array2::zeros(dim),
            back: Array2::zeros(dim),
            supplies: Array2::zeros(dim),
            colors: Array2::from_elem(dim, BLACK),
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        let (w, h) = config.grid_dims();
        Self::new(w, h)
    }

    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn width(&self) -> usize {
        self.dim().0
    }

    pub fn height(&self) -> usize {
        self.dim().1
    }

    fn check(&self, x: usize, y: usize) -> Result<(), GridError> {
        let (width, height) = self.dim();

        if x < width && y < height {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Linear index of `(x, y)`.
    pub fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        self.check(x, y)?;
        Ok(x * self.height() + y)
    }

    /// Current temperature field.
    pub fn cells(&self) -> &Array2<f64> {
        &self.cells
    }

    /// Mutable view of the temperature field, for seeding an initial
    /// distribution. The grid's shape can't be changed through it.
    ///
    /// Colors are not refreshed until the next step or
    /// [`DiffusionEngine::recolor`].
    pub fn cells_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.cells.view_mut()
    }

    pub fn supplies(&self) -> &Array2<f64> {
        &self.supplies
    }

    pub fn colors(&self) -> &Array2<Rgb> {
        &self.colors
    }

    pub fn value(&self, x: usize, y: usize) -> Result<f64, GridError> {
        self.check(x, y)?;
        Ok(self.cells[[x, y]])
    }

    pub fn supply(&self, x: usize, y: usize) -> Result<f64, GridError> {
        self.check(x, y)?;
        Ok(self.supplies[[x, y]])
    }

    pub fn color(&self, x: usize, y: usize) -> Result<Rgb, GridError> {
        self.check(x, y)?;
        Ok(self.colors[[x, y]])
    }

    /// Pin `(x, y)` to `magnitude`, or free it if it is already pinned to
    /// exactly `magnitude`.
    pub fn toggle_source(&mut self, x: usize, y: usize, magnitude: f64) -> Result<(), GridError> {
        self.check(x, y)?;
        if !magnitude.is_finite() {
            return Err(GridError::InvalidMagnitude { value: magnitude });
        }

        let s = &mut self.supplies[[x, y]];
        *s = if *s == magnitude { 0.0 } else { magnitude };

        log::debug!("toggle source ({}, {}) -> {}", x, y, *s);
        Ok(())
    }

    /// Pin `(x, y)` to `value`. A `value` of `0.0` frees the cell.
    pub fn set_source(&mut self, x: usize, y: usize, value: f64) -> Result<(), GridError> {
        self.check(x, y)?;
        if !value.is_finite() {
            return Err(GridError::InvalidMagnitude { value });
        }

        self.supplies[[x, y]] = value;
        log::debug!("set source ({}, {}) -> {}", x, y, value);
        Ok(())
    }

    pub fn clear_source(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.set_source(x, y, 0.0)
    }

    /// Free every cell. Temperatures are left as they are.
    pub fn reset_sources(&mut self) {
        self.supplies.fill(0.0);
        log::debug!("reset all sources");
    }

    pub fn apply(&mut self, edit: SourceEdit) -> Result<(), GridError> {
        match edit {
            SourceEdit::Heat { x, y } => self.toggle_source(x, y, MAX_SUPPLY),
            SourceEdit::Cold { x, y } => self.toggle_source(x, y, MIN_SUPPLY),
            SourceEdit::Clear => {
                self.reset_sources();
                Ok(())
            }
        }
    }

    fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.back);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let grid = GridState::new(4, 3);

        assert_eq!(grid.dim(), (4, 3));
        assert_eq!(grid.cells().len(), 12);
        assert_eq!(grid.supplies().len(), 12);
        assert_eq!(grid.colors().len(), 12);
        assert!(grid.cells().iter().all(|&v| v == 0.0));
        assert!(grid.supplies().iter().all(|&v| v == 0.0));
        assert!(grid.colors().iter().all(|&c| c == BLACK));
    }

    #[test]
    fn test_from_config() {
        let grid = GridState::from_config(&SimConfig::default());
        assert_eq!(grid.dim(), (33, 25));
    }

    #[test]
    fn test_index() {
        let grid = GridState::new(4, 3);

        assert_eq!(grid.index(0, 0), Ok(0));
        assert_eq!(grid.index(0, 2), Ok(2));
        assert_eq!(grid.index(1, 0), Ok(3));
        assert_eq!(grid.index(3, 2), Ok(11));
        assert_eq!(
            grid.index(4, 0),
            Err(GridError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(grid.index(0, 3).is_err());
    }

    #[test]
    fn test_index_matches_storage() {
        let mut grid = GridState::new(4, 3);
        grid.cells_mut()[[2, 1]] = 5.0;

        let i = grid.index(2, 1).unwrap();
        assert_eq!(grid.cells().as_slice().unwrap()[i], 5.0);
    }

    #[test]
    fn test_seed_through_view_then_step() {
        let mut grid = GridState::new(3, 3);
        {
            let mut cells = grid.cells_mut();
            cells.fill(2.0);
            cells[[0, 0]] = 6.0;
        }

        DiffusionEngine::new().step(&mut grid);

        assert_eq!(grid.dim(), (3, 3));
        assert_eq!(grid.cells().dim(), grid.supplies().dim());
        assert_eq!(grid.cells().dim(), grid.colors().dim());
        assert_eq!(grid.value(0, 0), Ok(4.0));
        assert_eq!(grid.value(1, 0), Ok(3.0));
        assert_eq!(grid.value(1, 1), Ok(2.0));
        assert!(grid.index(3, 3).is_err());
    }

    #[test]
    fn test_toggle_source() {
        let mut grid = GridState::new(3, 3);

        grid.toggle_source(1, 2, MAX_SUPPLY).unwrap();
        assert_eq!(grid.supply(1, 2), Ok(MAX_SUPPLY));

        grid.toggle_source(1, 2, MAX_SUPPLY).unwrap();
        assert_eq!(grid.supply(1, 2), Ok(0.0));

        // a different magnitude replaces instead of clearing
        grid.toggle_source(1, 2, MAX_SUPPLY).unwrap();
        grid.toggle_source(1, 2, MIN_SUPPLY).unwrap();
        assert_eq!(grid.supply(1, 2), Ok(MIN_SUPPLY));
    }

    #[test]
    fn test_toggle_source_errors() {
        let mut grid = GridState::new(3, 3);

        assert!(matches!(
            grid.toggle_source(3, 0, MAX_SUPPLY),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.toggle_source(0, 0, f64::NAN),
            Err(GridError::InvalidMagnitude { .. })
        ));
        assert!(grid.supplies().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_apply_edits() {
        let mut grid = GridState::new(3, 3);

        grid.apply(SourceEdit::Heat { x: 0, y: 0 }).unwrap();
        grid.apply(SourceEdit::Cold { x: 2, y: 2 }).unwrap();
        assert_eq!(grid.supply(0, 0), Ok(MAX_SUPPLY));
        assert_eq!(grid.supply(2, 2), Ok(MIN_SUPPLY));

        grid.cells_mut()[[1, 1]] = 3.0;
        grid.apply(SourceEdit::Clear).unwrap();
        assert!(grid.supplies().iter().all(|&v| v == 0.0));
        assert_eq!(grid.value(1, 1), Ok(3.0));

        assert!(grid.apply(SourceEdit::Heat { x: 5, y: 0 }).is_err());
    }

    #[test]
    fn test_set_and_clear_source() {
        let mut grid = GridState::new(2, 2);

        grid.set_source(1, 1, 4.5).unwrap();
        assert_eq!(grid.supply(1, 1), Ok(4.5));
        grid.clear_source(1, 1).unwrap();
        assert_eq!(grid.supply(1, 1), Ok(0.0));
        assert!(grid.set_source(0, 0, f64::INFINITY).is_err());
    }
}
