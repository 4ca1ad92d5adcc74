use ndarray::Array2;

use super::{stencil, GridState};

/// Advances a [`GridState`] by one fixed step at a time.
///
/// A step is not scaled by elapsed time: the simulation runs at one step per
/// call, however often the caller calls it.
#[derive(Debug, Clone)]
pub struct DiffusionEngine {
    delta: Array2<f64>,
    steps: u64,
}

impl Default for DiffusionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffusionEngine {
    pub fn new() -> Self {
        Self {
            delta: Array2::zeros((0, 0)),
            steps: 0,
        }
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The delta field computed by the last step.
    pub fn delta(&self) -> &Array2<f64> {
        &self.delta
    }

    /// Diffuse `grid` by one step and refresh its colors.
    ///
    /// Every cell reads the field as it was before the step. Pinned cells end
    /// the step at exactly their supply value.
    pub fn step(&mut self, grid: &mut GridState) {
        if self.delta.dim() != grid.dim() {
            self.delta = Array2::zeros(grid.dim());
        }

        stencil::laplacian(&mut self.delta, &grid.cells);
        stencil::advance(&mut grid.back, &grid.cells, &grid.supplies, &self.delta);
        grid.swap_buffers();
        Self::recolor(grid);

        self.steps += 1;
        log::trace!("step {} on {:?} grid", self.steps, grid.dim());
    }

    pub fn run(&mut self, grid: &mut GridState, n: usize) {
        for _ in 0..n {
            self.step(grid);
        }
    }

    /// Recompute the color field from the current temperatures.
    pub fn recolor(grid: &mut GridState) {
        stencil::recolor(&mut grid.colors, &grid.cells);
    }
}
