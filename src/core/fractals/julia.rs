use crate::core::data::plane_point::PlanePoint;
use crate::core::fractals::ESCAPE_RADIUS_SQUARED;

/// Default Julia constant. A connected-set constant that renders well at
/// the startup view; callers can supply their own through
/// [`EscapeEngine::new`](crate::core::fractals::escape_engine::EscapeEngine::new).
pub const DEFAULT_JULIA_CONSTANT: PlanePoint = PlanePoint { a: -0.7, b: 0.27015 };

/// Escape count for the Julia set with the given constant. Structurally
/// the Mandelbrot loop, but `c` is fixed and the orbit starts at the
/// seed.
#[must_use]
pub fn escape_iterations(seed: PlanePoint, constant: PlanePoint, max_iterations: u32) -> u32 {
    let mut a = seed.a;
    let mut b = seed.b;

    for iteration in 0..max_iterations {
        let next_a = a * a - b * b + constant.a;
        let next_b = 2.0 * a * b + constant.b;
        a = next_a;
        b = next_b;

        if a * a + b * b > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}
