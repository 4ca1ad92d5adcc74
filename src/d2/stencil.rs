use ndarray::{Array2, Zip};

use crate::color::{color_of, Rgb};

/// Weight applied to the summed neighbour differences.
const RATE: f64 = 0.25;

fn cell_delta(v: &Array2<f64>, i: usize, j: usize) -> f64 {
    let (w, h) = v.dim();
    let c = v[[i, j]];

    let mut d = 0.0;

    if i > 0 {
        d += v[[i - 1, j]] - c;
    }

    if i + 1 < w {
        d += v[[i + 1, j]] - c;
    }

    if j > 0 {
        d += v[[i, j - 1]] - c;
    }

    if j + 1 < h {
        d += v[[i, j + 1]] - c;
    }

    d * RATE
}

/// 4-neighbour Laplacian of `v`, scaled by [`RATE`]. Cells on the border
/// only see the neighbours that exist.
pub(crate) fn laplacian(out: &mut Array2<f64>, v: &Array2<f64>) {
    assert_eq!(out.dim(), v.dim());

    let zip = Zip::indexed(out);

    #[cfg(feature = "rayon")]
    zip.par_for_each(|(i, j), e| *e = cell_delta(v, i, j));
    #[cfg(not(feature = "rayon"))]
    zip.for_each(|(i, j), e| *e = cell_delta(v, i, j));
}

/// `next = supply` where a supply is set, `v + delta` elsewhere.
pub(crate) fn advance(
    next: &mut Array2<f64>,
    v: &Array2<f64>,
    supplies: &Array2<f64>,
    delta: &Array2<f64>,
) {
    assert_eq!(next.dim(), v.dim());
    assert_eq!(supplies.dim(), v.dim());
    assert_eq!(delta.dim(), v.dim());

    let zip = Zip::from(next).and(v).and(supplies).and(delta);
    let f = |n: &mut f64, &c: &f64, &s: &f64, &d: &f64| {
        *n = if s != 0.0 { s } else { c + d };
    };

    #[cfg(feature = "rayon")]
    zip.par_for_each(f);
    #[cfg(not(feature = "rayon"))]
    zip.for_each(f);
}

pub(crate) fn recolor(colors: &mut Array2<Rgb>, v: &Array2<f64>) {
    assert_eq!(colors.dim(), v.dim());

    let zip = Zip::from(colors).and(v);

    #[cfg(feature = "rayon")]
    zip.par_for_each(|c, &t| *c = color_of(t));
    #[cfg(not(feature = "rayon"))]
    zip.for_each(|c, &t| *c = color_of(t));
}
