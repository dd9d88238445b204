/// A coordinate in the fractal plane. `a` is the real axis, `b` the
/// imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PlanePoint {
    pub a: f64,
    pub b: f64,
}
