use rayon::prelude::*;

use crate::core::fractals::escape_engine::EscapeEngine;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::view::snapshot::ViewSnapshot;

/// Computes the iteration count for every pixel of a `width` x `height`
/// surface, row-major from the top-left.
///
/// Rows are distributed across rayon's pool. Each pixel reads only the
/// immutable view snapshot, so rows are independent and the result order
/// is fixed by the row index, not by completion order.
#[must_use]
pub fn compute_escape_grid(
    view: ViewSnapshot,
    engine: &EscapeEngine,
    kind: FractalKind,
    max_iterations: u32,
    width: u32,
    height: u32,
) -> Vec<u32> {
    let rows: Vec<Vec<u32>> = (0..height)
        .into_par_iter()
        .map(|y| compute_row(view, engine, kind, max_iterations, width, y))
        .collect();

    rows.into_iter().flatten().collect()
}

fn compute_row(
    view: ViewSnapshot,
    engine: &EscapeEngine,
    kind: FractalKind,
    max_iterations: u32,
    width: u32,
    y: u32,
) -> Vec<u32> {
    (0..width)
        .map(|x| {
            let seed = view.screen_to_plane(f64::from(x), f64::from(y));
            engine.iterate(seed, kind, max_iterations)
        })
        .collect()
}
