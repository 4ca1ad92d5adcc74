//! Quad mesh for drawing a [`GridState`].
//!
//! Each quad spans from one cell to its right/up/diagonal neighbours and
//! takes their colors at its corners, so a renderer that blends vertex
//! colors draws a smooth field instead of flat squares.

use cgmath::{point2, Point2};

use super::GridState;
use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Pixel position of corner 0.
    pub origin: Point2<f64>,
    /// Side length in pixels.
    pub size: f64,
    /// Corner colors of `(x, y)`, `(x+1, y)`, `(x+1, y+1)` and `(x, y+1)`.
    pub colors: [Rgb; 4],
}

impl Quad {
    /// Pixel positions of the four corners, in the same order as `colors`.
    pub fn corners(&self) -> [Point2<f64>; 4] {
        let Point2 { x, y } = self.origin;
        let s = self.size;

        [
            point2(x, y),
            point2(x + s, y),
            point2(x + s, y + s),
            point2(x, y + s),
        ]
    }

    /// Bilinear blend of the corner colors at `(s, t)` in `[0, 1]^2`.
    pub fn shade(&self, s: f64, t: f64) -> Rgb {
        let s1 = s.max(0.0).min(1.0);
        let s0 = 1.0 - s1;

        let t1 = t.max(0.0).min(1.0);
        let t0 = 1.0 - t1;

        let [c00, c10, c11, c01] = self.colors;

        (c00 * t0 + c01 * t1) * s0 + (c10 * t0 + c11 * t1) * s1
    }
}

/// Quads covering `grid`, `cell_px` pixels per cell.
///
/// The last row and column only contribute corners, so a `w x h` grid yields
/// `(w - 1) * (h - 1)` quads.
pub fn quads(grid: &GridState, cell_px: f64) -> impl Iterator<Item = Quad> + '_ {
    let (w, h) = grid.dim();
    let colors = grid.colors();

    (0..w.saturating_sub(1)).flat_map(move |x| {
        (0..h.saturating_sub(1)).map(move |y| Quad {
            origin: point2(x as f64 * cell_px, y as f64 * cell_px),
            size: cell_px,
            colors: [
                colors[[x, y]],
                colors[[x + 1, y]],
                colors[[x + 1, y + 1]],
                colors[[x, y + 1]],
            ],
        })
    })
}
