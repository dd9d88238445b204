pub mod escape_engine;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
pub mod sierpinski;

/// Squared escape radius for the escape-time kinds: radius 4, looser
/// than the canonical radius-2 bound.
pub const ESCAPE_RADIUS_SQUARED: f64 = 16.0;
