use crate::core::data::plane_point::PlanePoint;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::{julia, mandelbrot, sierpinski};

/// Conventional iteration bound. A parameter everywhere it is consumed;
/// this constant only names the convention.
pub const DEFAULT_MAX_ITERATIONS: u32 = 150;

/// Per-point iteration engine for all supported fractal kinds.
///
/// Carries the fractal-specific parameters that are not derived from the
/// point itself — currently only the Julia constant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeEngine {
    julia_constant: PlanePoint,
}

impl Default for EscapeEngine {
    fn default() -> Self {
        Self {
            julia_constant: julia::DEFAULT_JULIA_CONSTANT,
        }
    }
}

impl EscapeEngine {
    #[must_use]
    pub fn new(julia_constant: PlanePoint) -> Self {
        Self { julia_constant }
    }

    #[must_use]
    pub fn julia_constant(&self) -> PlanePoint {
        self.julia_constant
    }

    /// Iteration count in `[0, max_iterations]` for the given plane
    /// point. `max_iterations` means the point is presumed inside the
    /// set (or, for Sierpinski, inside the solid region at full depth).
    #[must_use]
    pub fn iterate(&self, seed: PlanePoint, kind: FractalKind, max_iterations: u32) -> u32 {
        match kind {
            FractalKind::Mandelbrot => mandelbrot::escape_iterations(seed, max_iterations),
            FractalKind::Julia => {
                julia::escape_iterations(seed, self.julia_constant, max_iterations)
            }
            FractalKind::Sierpinski => sierpinski::exclusion_depth(seed, max_iterations),
        }
    }
}
