use crate::core::data::plane_point::PlanePoint;
use crate::core::fractals::ESCAPE_RADIUS_SQUARED;

/// Escape count for the Mandelbrot set at `seed`. The orbit starts at
/// the seed itself with `c = seed`, so the count is the number of
/// completed `z = z² + c` updates before the orbit left the escape
/// radius, or `max_iterations` if it never did.
#[must_use]
pub fn escape_iterations(seed: PlanePoint, max_iterations: u32) -> u32 {
    let mut a = seed.a;
    let mut b = seed.b;

    for iteration in 0..max_iterations {
        let next_a = a * a - b * b + seed.a;
        let next_b = 2.0 * a * b + seed.b;
        a = next_a;
        b = next_b;

        if a * a + b * b > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}
